//! Date and time utility functions
//!
//! Date inputs are entered as `YYYY-MM-DD` and stored as epoch milliseconds at
//! midnight UTC of that calendar date.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Date format used by the form's date inputs
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), INPUT_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(INPUT_DATE_FORMAT).to_string()
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date `days_offset` days away from `from`
pub fn date_relative_to(from: NaiveDate, days_offset: i64) -> NaiveDate {
    from + Duration::days(days_offset)
}

/// Epoch milliseconds at midnight UTC of the given date
pub fn start_of_day_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Parse a date input into epoch milliseconds.
///
/// Returns `None` for anything that is not a complete, valid date, which lets
/// callers treat half-typed input as a no-op.
pub fn parse_date_input(input: &str) -> Option<i64> {
    parse_date(input).ok().map(start_of_day_millis)
}

/// Format epoch milliseconds with a chrono format string, in UTC
pub fn format_millis(millis: i64, format: &str) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.format(format).to_string(),
        None => millis.to_string(),
    }
}

/// Whole days between two epoch-millisecond instants
pub fn days_between(start_millis: i64, end_millis: i64) -> i64 {
    (end_millis - start_millis) / Duration::days(1).num_milliseconds()
}
