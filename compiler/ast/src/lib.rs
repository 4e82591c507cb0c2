//! The abstract syntax tree for Hyperion configs and sweeps.
//!
//! Two related tree shapes share one expression grammar:
//! [`Config`] (plain bindings/imports/includes/`with` blocks) and
//! [`Sweep`] (the same, plus `All`/`Product`/`Union`/`Table`). Both are
//! walked by the single [`fold`] recursion primitive that every
//! transform (`hyperion-passes`), the enumerator (`hyperion-enumerate`),
//! and the renderer (`hyperion-render`) build on.

pub mod config;
pub use config::*;

pub mod expr;
pub use expr::*;

pub mod fold;
pub use fold::*;

pub mod ident;
pub use ident::*;

pub mod operators;
pub use operators::*;

pub mod sweep;
pub use sweep::*;
