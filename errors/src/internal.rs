/// An invariant that should be unreachable in correct code — an unknown
/// node tag surviving to a pass that assumed it had been eliminated, a
/// fold visiting a node shape it didn't expect, and so on. Never
/// constructed by a correct call path; its presence in a `Result` is
/// itself a bug report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {0}")]
pub struct InternalError(pub String);

impl InternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
