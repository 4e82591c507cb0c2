use hyperion_span::Span;
use std::fmt;

/// A lexical or syntactic failure, carrying the byte offset at which the
/// parser gave up and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at byte {offset}: {message}")]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self { offset, message: message.into() }
    }

    pub fn at_span(span: Span, message: impl Into<String>) -> Self {
        Self::new(span.lo as usize, message.into())
    }

    pub fn expected(offset: usize, expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self::new(offset, format!("expected {expected}, found {found}"))
    }
}
