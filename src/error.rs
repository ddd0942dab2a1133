//! CLI Error Types

use derive_more::{Display, Error};

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not read input: {_0}")]
    Input(#[error(not(source))] String),
    #[display("could not extract page content")]
    Extract,
    #[display("could not hash asset")]
    Asset,
    #[display("could not apply filter")]
    Filter,
    #[display("could not write output")]
    Output,
}
