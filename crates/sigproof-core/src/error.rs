//! Error types for canonical message construction.

use thiserror::Error;

/// Errors that can occur while rendering a validation result to its canonical form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CanonicalError {
    /// A monetary amount is missing, not finite, or not a number at all.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// A mandatory field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}
