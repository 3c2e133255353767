use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::CalcError;

use super::rule::RecurrenceRule;
use super::validator::validate;

/// How far ahead a monthly rule is searched before it is declared
/// unsatisfiable. Ten years covers the longest gap between two Feb 29ths.
pub const DEFAULT_SCAN_HORIZON_YEARS: u32 = 10;

/// Computes the next occurrence of `rule` after `anchor` that is not before `now`.
///
/// The result is always strictly after `anchor`. Uses the default monthly
/// scan horizon; see [`next_date_within`] to choose another.
pub fn next_date(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    now: NaiveDate,
) -> Result<NaiveDate, CalcError> {
    next_date_within(rule, anchor, now, DEFAULT_SCAN_HORIZON_YEARS)
}

/// Same as [`next_date`], searching monthly rules at most `horizon_years` ahead.
///
/// # Behavior
/// - Yearly: anchor plus whole years; Feb 29 clamps to Feb 28 in common years
/// - Daily: anchor plus the smallest multiple of the interval reaching `now`
/// - Weekly: first listed weekday from the scan start, at most 7 days out
/// - Monthly: month-by-month walk resolving `-1`/`-2` against each month's length
///
/// The rule is validated first, so an unchecked rule yields
/// [`CalcError::InvalidRule`] rather than looping.
pub fn next_date_within(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    now: NaiveDate,
    horizon_years: u32,
) -> Result<NaiveDate, CalcError> {
    validate(rule)?;

    let next = match rule {
        RecurrenceRule::Yearly => next_yearly(anchor, now)?,
        RecurrenceRule::Daily { interval } => next_daily(anchor, now, u64::from(interval.unsigned_abs()))?,
        RecurrenceRule::Weekly { weekdays } => next_weekly(anchor, now, weekdays)?,
        RecurrenceRule::Monthly { days, months } => {
            let start = scan_start(anchor, now)?;
            next_monthly(start, days, months.as_deref(), horizon_years)?.ok_or_else(|| {
                CalcError::NoOccurrence {
                    rule: rule.to_string(),
                    horizon_years,
                }
            })?
        }
    };

    tracing::debug!(%rule, %anchor, %now, %next, "computed next date");
    Ok(next)
}

/// First candidate date for the scanning kinds: the later of the day after
/// `anchor` and `now` itself.
fn scan_start(anchor: NaiveDate, now: NaiveDate) -> Result<NaiveDate, CalcError> {
    let after_anchor = anchor.succ_opt().ok_or(CalcError::OutOfRange)?;
    Ok(after_anchor.max(now))
}

fn next_yearly(anchor: NaiveDate, now: NaiveDate) -> Result<NaiveDate, CalcError> {
    // Skip straight to the year before `now`; anything earlier cannot qualify.
    let mut years = u32::try_from(now.year() - anchor.year() - 1).unwrap_or(0).max(1);
    loop {
        // Always offset from the original anchor so a Feb 29 anchor comes
        // back to Feb 29 in leap years instead of drifting to the 28th.
        let candidate = anchor
            .checked_add_months(Months::new(years.checked_mul(12).ok_or(CalcError::OutOfRange)?))
            .ok_or(CalcError::OutOfRange)?;
        if candidate >= now {
            return Ok(candidate);
        }
        years += 1;
    }
}

fn next_daily(anchor: NaiveDate, now: NaiveDate, interval: u64) -> Result<NaiveDate, CalcError> {
    let steps = if now > anchor {
        let gap = (now - anchor).num_days().unsigned_abs();
        gap.div_ceil(interval).max(1)
    } else {
        1
    };
    anchor
        .checked_add_days(Days::new(steps * interval))
        .ok_or(CalcError::OutOfRange)
}

fn next_weekly(anchor: NaiveDate, now: NaiveDate, weekdays: &[i32]) -> Result<NaiveDate, CalcError> {
    scan_start(anchor, now)?
        .iter_days()
        .take(7)
        .find(|day| weekdays.contains(&(day.weekday().number_from_monday() as i32)))
        .ok_or(CalcError::OutOfRange)
}

fn next_monthly(
    start: NaiveDate,
    days: &[i32],
    months: Option<&[i32]>,
    horizon_years: u32,
) -> Result<Option<NaiveDate>, CalcError> {
    let first_month = start.with_day(1).ok_or(CalcError::OutOfRange)?;
    for offset in 0..horizon_years.saturating_mul(12) {
        let month_start = first_month
            .checked_add_months(Months::new(offset))
            .ok_or(CalcError::OutOfRange)?;
        if let Some(filter) = months {
            if !filter.contains(&(month_start.month() as i32)) {
                continue;
            }
        }

        let earliest = days
            .iter()
            .filter_map(|&spec| resolve_month_day(month_start, spec))
            .filter(|date| *date >= start)
            .min();
        if earliest.is_some() {
            return Ok(earliest);
        }
    }
    Ok(None)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> Option<u32> {
    let month_start = date.with_day(1)?;
    let next_month = month_start.checked_add_months(Months::new(1))?;
    Some(next_month.pred_opt()?.day())
}

/// Resolves a monthly day-spec against the month containing `date`.
///
/// Positive specs are literal days and resolve to `None` when the month is
/// too short. `-1` is the last day, `-2` the second-to-last.
pub fn resolve_month_day(date: NaiveDate, spec: i32) -> Option<NaiveDate> {
    let last = days_in_month(date)?;
    let day = match spec {
        -1 => last,
        -2 => last - 1,
        d if d >= 1 => d as u32,
        _ => return None,
    };
    if day > last {
        return None;
    }
    date.with_day(day)
}
