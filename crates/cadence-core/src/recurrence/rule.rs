use std::fmt;

/// Kind of repetition, identified in the raw grammar by a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RuleKind {
    /// The single-letter code used in raw rule strings.
    pub fn code(self) -> &'static str {
        match self {
            RuleKind::Daily => "d",
            RuleKind::Weekly => "w",
            RuleKind::Monthly => "m",
            RuleKind::Yearly => "y",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(RuleKind::Daily),
            "w" => Some(RuleKind::Weekly),
            "m" => Some(RuleKind::Monthly),
            "y" => Some(RuleKind::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Daily => write!(f, "daily"),
            RuleKind::Weekly => write!(f, "weekly"),
            RuleKind::Monthly => write!(f, "monthly"),
            RuleKind::Yearly => write!(f, "yearly"),
        }
    }
}

/// Field of a rule, used to pinpoint validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Interval,
    Weekdays,
    MonthDays,
    Months,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleField::Interval => write!(f, "interval"),
            RuleField::Weekdays => write!(f, "weekdays"),
            RuleField::MonthDays => write!(f, "month days"),
            RuleField::Months => write!(f, "months"),
        }
    }
}

/// A parsed repetition pattern.
///
/// Each variant carries only the fields its kind uses. Values are kept as
/// parsed (signed, unchecked); [`validate`](super::validate) enforces ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// `d <n>`: every `interval` days.
    Daily { interval: i32 },
    /// `w <list>`: on the listed ISO weekdays (1 = Monday .. 7 = Sunday).
    Weekly { weekdays: Vec<i32> },
    /// `m <days> [<months>]`: on the listed days of the month, where `-1` is
    /// the last day and `-2` the second-to-last. `months` restricts which
    /// months qualify; `None` means all of them.
    Monthly {
        days: Vec<i32>,
        months: Option<Vec<i32>>,
    },
    /// `y`: same month and day every year.
    Yearly,
}

impl RecurrenceRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            RecurrenceRule::Daily { .. } => RuleKind::Daily,
            RecurrenceRule::Weekly { .. } => RuleKind::Weekly,
            RecurrenceRule::Monthly { .. } => RuleKind::Monthly,
            RecurrenceRule::Yearly => RuleKind::Yearly,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[i32]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// Formats the rule in its canonical raw form, e.g. `m 1,-1 2,8`.
impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().code())?;
        match self {
            RecurrenceRule::Daily { interval } => write!(f, " {}", interval),
            RecurrenceRule::Weekly { weekdays } => {
                f.write_str(" ")?;
                write_list(f, weekdays)
            }
            RecurrenceRule::Monthly { days, months } => {
                f.write_str(" ")?;
                write_list(f, days)?;
                if let Some(months) = months {
                    f.write_str(" ")?;
                    write_list(f, months)?;
                }
                Ok(())
            }
            RecurrenceRule::Yearly => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in [RuleKind::Daily, RuleKind::Weekly, RuleKind::Monthly, RuleKind::Yearly] {
            assert_eq!(RuleKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(RuleKind::from_code("x"), None);
        assert_eq!(RuleKind::from_code("D"), None);
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(RecurrenceRule::Daily { interval: 3 }.to_string(), "d 3");
        assert_eq!(RecurrenceRule::Yearly.to_string(), "y");
        assert_eq!(
            RecurrenceRule::Weekly { weekdays: vec![1, 3, 7] }.to_string(),
            "w 1,3,7"
        );
        assert_eq!(
            RecurrenceRule::Monthly { days: vec![1, -1], months: None }.to_string(),
            "m 1,-1"
        );
        assert_eq!(
            RecurrenceRule::Monthly { days: vec![-2], months: Some(vec![2, 8]) }.to_string(),
            "m -2 2,8"
        );
    }

    #[test]
    fn test_kind_of_rule() {
        assert_eq!(RecurrenceRule::Yearly.kind(), RuleKind::Yearly);
        assert_eq!(
            RecurrenceRule::Monthly { days: vec![5], months: None }.kind(),
            RuleKind::Monthly
        );
    }
}
