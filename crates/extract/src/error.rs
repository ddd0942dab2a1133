//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The rendered page does not follow the heading → list → anchor layout
    /// the filters depend on. The page template needs fixing.
    #[display("malformed content in {page}: missing {missing}")]
    MalformedContent {
        /// Identifier of the page being processed.
        page: String,
        /// The structural element that could not be found.
        missing: Missing,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The page is either structured correctly or it isn't.
        false
    }
}

/// The structural element absent from a rendered page.
///
/// Headings are counted from 1, list items from 0.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    #[display("heading #{_0}")]
    Heading(usize),
    #[display("list following heading #{_0}")]
    List(usize),
    #[display("anchor in list item {_0}")]
    Anchor(usize),
    #[display("href on anchor in list item {_0}")]
    Href(usize),
}
