use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::error::ValidationError;

use super::rule::{RecurrenceRule, RuleField, RuleKind};

pub const INTERVAL_RANGE: RangeInclusive<i32> = 1..=400;
pub const WEEKDAY_RANGE: RangeInclusive<i32> = 1..=7;
pub const MONTH_DAY_RANGE: RangeInclusive<i32> = -2..=31;
pub const MONTH_RANGE: RangeInclusive<i32> = 1..=12;

/// Checks a rule's values against the limits of its kind.
///
/// Purely structural: no calendar is consulted, so `m 31 2` passes here and
/// is only found to be unsatisfiable when computing a next date.
pub fn validate(rule: &RecurrenceRule) -> Result<(), ValidationError> {
    let kind = rule.kind();
    match rule {
        RecurrenceRule::Daily { interval } => {
            if !INTERVAL_RANGE.contains(interval) {
                return Err(ValidationError::OutOfRange {
                    kind,
                    field: RuleField::Interval,
                    value: *interval,
                });
            }
            Ok(())
        }
        RecurrenceRule::Weekly { weekdays } => {
            check_set(kind, RuleField::Weekdays, weekdays, |v| WEEKDAY_RANGE.contains(&v))
        }
        RecurrenceRule::Monthly { days, months } => {
            check_set(kind, RuleField::MonthDays, days, |v| {
                v != 0 && MONTH_DAY_RANGE.contains(&v)
            })?;
            if let Some(months) = months {
                check_set(kind, RuleField::Months, months, |v| MONTH_RANGE.contains(&v))?;
            }
            Ok(())
        }
        RecurrenceRule::Yearly => Ok(()),
    }
}

fn check_set(
    kind: RuleKind,
    field: RuleField,
    values: &[i32],
    allowed: impl Fn(i32) -> bool,
) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty { kind, field });
    }

    let mut seen = HashSet::with_capacity(values.len());
    for &value in values {
        if !allowed(value) {
            return Err(ValidationError::OutOfRange { kind, field, value });
        }
        if !seen.insert(value) {
            return Err(ValidationError::Duplicate { kind, field, value });
        }
    }
    Ok(())
}
