//! Error types for the Tempora library.
//!
//! All fallible operations in this crate return [`Result`], which wraps
//! [`TemporaError`]. Classification itself never fails; the error type
//! exists for the I/O and serialization boundary around the engine.
//!
//! # Examples
//!
//! ```
//! use tempora::error::{TemporaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TemporaError::invalid_operation("unsupported request"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Tempora operations.
#[derive(Error, Debug)]
pub enum TemporaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (normalization, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TemporaError.
pub type Result<T> = std::result::Result<T, TemporaError>;

impl TemporaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TemporaError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TemporaError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TemporaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemporaError::analysis("bad token stream");
        assert_eq!(err.to_string(), "Analysis error: bad token stream");

        let err = TemporaError::invalid_operation("nope");
        assert_eq!(err.to_string(), "Invalid operation: nope");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: TemporaError = io_err.into();
        assert!(matches!(err, TemporaError::Io(_)));
    }
}
