//! The transform pipeline that turns parsed configs and sweeps into the
//! normalized form the rest of the toolchain consumes: one
//! module per pass, composed in `pipeline` into `preprocess_config` and
//! `preprocess_sweep`. Each pass is a free function over an owned
//! `Config`/`Sweep`, grounded on `compiler/passes/src/lib.rs`'s
//! one-module-per-pass layout.

pub mod partial_eval;
pub use partial_eval::*;

pub mod expressions_to_calls;
pub use expressions_to_calls::*;

pub mod calls_to_evaluated_references;
pub use calls_to_evaluated_references::*;

pub mod flatten_withs;
pub use flatten_withs::*;

pub mod validate_sweep;
pub use validate_sweep::*;

pub mod remove_prelude;
pub use remove_prelude::*;

pub mod bindings_to_singletons;
pub use bindings_to_singletons::*;

pub mod pipeline;
pub use pipeline::*;
