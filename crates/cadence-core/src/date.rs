//! Calendar dates at the system boundary.
//!
//! Dates are stored and exchanged as fixed-width `YYYYMMDD` strings, which
//! also sort correctly as text. Searches accept the `DD.MM.YYYY` form.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Storage and wire format of a task date.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Date form accepted in search strings.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a strict `YYYYMMDD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CoreError::InvalidDate(value.to_string()))
}

#[inline]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Interprets a search string as a `DD.MM.YYYY` date, if it is one.
pub fn parse_search_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SEARCH_DATE_FORMAT).ok()
}
