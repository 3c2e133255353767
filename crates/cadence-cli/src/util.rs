use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::parser::parse_strict_date;

/// The date commands treat as today: the `--today` override or the local date.
pub fn resolve_today(override_date: Option<&str>) -> Result<NaiveDate> {
    match override_date {
        Some(date) => parse_strict_date(date),
        None => Ok(Local::now().date_naive()),
    }
}
