//! Error types for the library catalog.

use thiserror::Error;

/// Errors that can occur while building library items.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    /// The type tag names no known item variant.
    #[error("Unknown library item type: {0}")]
    UnknownType(String),

    /// A magazine issue number that is not an integer.
    #[error("Invalid magazine issue number: {0}")]
    InvalidIssue(String),
}
