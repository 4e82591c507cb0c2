/// A failure reading a config or sweep file from disk — the one place
/// the thin external glue touches the filesystem.
/// Carries the underlying `std::io::Error`'s message rather than the
/// error itself, so `Error` can keep deriving `Clone`/`PartialEq`/`Eq`
/// like its other three variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reading {path}: {message}")]
pub struct IoError {
    pub path: String,
    pub message: String,
}

impl IoError {
    pub fn new(path: impl Into<String>, source: std::io::Error) -> Self {
        Self { path: path.into(), message: source.to_string() }
    }
}
