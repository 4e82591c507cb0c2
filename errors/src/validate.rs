/// A structural invariant violated after parsing — e.g. an uneven `Table`.
/// Fatal to the containing `validate_sweep` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
