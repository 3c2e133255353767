use anyhow::{anyhow, Result};
use cadence_core::date::{format_date, parse_date};
use chrono::NaiveDate;
use chrono_english::{parse_date_string, Dialect};

/// Turns user date input into the stored `YYYYMMDD` form.
///
/// `YYYYMMDD` is taken as is. Anything else goes through `chrono-english`
/// relative to `today`, so "tomorrow" or "next friday" work.
pub fn parse_date_input(input: &str, today: NaiveDate) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }
    if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(format_date(parse_date(input)?));
    }

    let base = today
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow!("Invalid reference date {}", today))?
        .and_utc();
    let parsed = parse_date_string(input, base, Dialect::Uk)
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", input, e))?;
    Ok(format_date(parsed.date_naive()))
}

/// Parses a strict `YYYYMMDD` date.
pub fn parse_strict_date(input: &str) -> Result<NaiveDate> {
    Ok(parse_date(input.trim())?)
}
