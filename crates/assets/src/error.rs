//! Asset Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An asset error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for asset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The asset referenced by a page was not built, or cannot be read.
    #[display("missing asset: {_0}")]
    MissingAsset(#[error(not(source))] String),
    /// The asset URL points outside of the output directory.
    #[display("invalid asset path: {_0}")]
    InvalidPath(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
