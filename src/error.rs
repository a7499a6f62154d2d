//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating patient IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID does not start with the required prefix.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The ID has a prefix but no digits after it.
    #[error("ID missing digits after prefix")]
    MissingDigits,

    /// A character after the prefix is not an ASCII digit.
    #[error("invalid character '{found}' at position {position}: expected ASCII digit")]
    InvalidDigit { found: char, position: usize },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::InvalidPrefix { .. })
    }
}
