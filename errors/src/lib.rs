//! The error taxonomy for the Hyperion workspace.
//!
//! Every fallible function in every Hyperion crate returns this module's
//! [`Result`]. The four leaf error kinds are composed into one [`Error`]
//! via `#[from]`, one per-concern enum per error, rather than a single
//! flat enum.

pub mod eval;
pub use eval::*;

pub mod internal;
pub use internal::*;

pub mod io;
pub use io::*;

pub mod parse;
pub use parse::*;

pub mod validate;
pub use validate::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, Error>;
