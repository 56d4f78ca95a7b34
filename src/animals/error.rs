//! Error types for the animal registry.

use thiserror::Error;

/// Errors that can occur while building animals.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnimalError {
    /// The type tag names no known species.
    #[error("Unknown animal type: {0}")]
    UnknownType(String),
}
