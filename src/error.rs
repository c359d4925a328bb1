//! Error types for parsing and mutating S-expression trees.
use thiserror::Error;

/// A parse-time failure, always carried inside [`SexpError::Syntax`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected ')' at byte offset {offset}")]
    UnexpectedClose { offset: usize },
    #[error("unclosed list: reached end of input with an open '('")]
    UnclosedList,
    #[error("nesting exceeds the configured maximum depth")]
    TooDeep,
}

/// The error type returned by every fallible operation in this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SexpError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("index out of range")]
    OutOfRange,
    #[error("no child matched the given key")]
    NotFound,
    #[error("type mismatch: {0}")]
    TypeMismatch(&'static str),
    #[error("handle belongs to a different tree")]
    CrossTree,
}

pub type Result<T> = std::result::Result<T, SexpError>;
