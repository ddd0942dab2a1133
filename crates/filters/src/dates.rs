//! Date filters for episode listings and feeds.

use exn::{OptionExt, ResultExt};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Month names in the genitive case, as used after a day number.
const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября", "октября", "ноября",
    "декабря",
];

const HTML_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
const CALENDAR_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Formats a date for display on the site, in Russian: `19 октября 2026`.
///
/// The day is not zero-padded and no year marker (`г.`) is appended. The date
/// is taken in the value's own offset.
///
/// ```rust
/// use pineapple_filters::readable_date;
/// use time::macros::datetime;
///
/// assert_eq!(readable_date(datetime!(2026-03-08 12:00 UTC)), "8 марта 2026");
/// ```
pub fn readable_date(value: OffsetDateTime) -> String {
    let month = MONTHS_GENITIVE[usize::from(u8::from(value.month())) - 1];
    format!("{} {} {}", value.day(), month, value.year())
}

/// Formats a date as an ISO 8601 UTC timestamp with millisecond precision,
/// suitable for `<time datetime>` attributes and feeds.
#[instrument(level = "trace")]
pub fn html_date_string(value: OffsetDateTime) -> Result<String> {
    let utc = value.checked_to_offset(UtcOffset::UTC).ok_or_raise(|| ErrorKind::Format("html date"))?;
    utc.format(HTML_DATE).or_raise(|| ErrorKind::Format("html date"))
}

/// Parses a date from front matter or the command line.
///
/// Accepts RFC 3339 timestamps as well as bare calendar dates; the latter are
/// taken as midnight UTC.
#[instrument(level = "debug")]
pub fn parse_date(value: &str) -> Result<OffsetDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(timestamp);
    }
    let date = Date::parse(value, CALENDAR_DATE)
        .inspect_err(|err| tracing::debug!(%err, "not an RFC 3339 timestamp or calendar date"))
        .or_raise(|| ErrorKind::ParseError {
            field: "date",
            value: value.to_string(),
        })?;
    Ok(date.midnight().assume_utc())
}
