//! Error types for feedscan

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No document text was supplied, or the text was empty.
    EmptySource,
    /// Reading a document from a file-like source failed.
    Io(String),
    /// A closing tag did not match the innermost open tag.
    MismatchedClosingTag { expected: String, found: String },
    /// A closing tag arrived with no open tag left on the stack.
    UnexpectedClosingTag { found: String },
    /// An opening tag was never closed before the end of the document.
    UnclosedTag { tag: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "no document text set"),
            Self::Io(message) => write!(f, "read failed: {message}"),
            Self::MismatchedClosingTag { expected, found } => {
                write!(f, "Expected closing tag for {expected}, but found {found}.")
            }
            Self::UnexpectedClosingTag { found } => {
                write!(f, "Found {found} without a matching opening tag.")
            }
            Self::UnclosedTag { tag } => write!(f, "{tag} lacks closing tag."),
        }
    }
}

/// Main error type for feedscan
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    offset: Option<usize>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, offset: None }
    }

    /// Create error anchored at a byte offset in the document
    pub fn at(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset of the offending tag, when known
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Result type alias for feedscan
pub type Result<T> = std::result::Result<T, Error>;
