//! Display filters shared by the site templates.

mod dates;
pub mod error;
mod sequence;

pub use crate::dates::{html_date_string, parse_date, readable_date};
pub use crate::sequence::{min, slice};
