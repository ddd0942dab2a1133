//! Filter Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A filter error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value could not be formatted for output.
    #[display("failed to format {_0}")]
    Format(#[error(not(source))] &'static str),
    /// An input value could not be parsed.
    #[display("failed to parse '{value}' as {field}")]
    ParseError {
        field: &'static str,
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
