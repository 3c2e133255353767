use std::str::FromStr;

use crate::error::ParseError;

use super::rule::{RecurrenceRule, RuleKind};

/// Parses a raw recurrence string into a rule.
///
/// An empty string means "no recurrence" and yields `Ok(None)`. Only the
/// lexical shape is checked here: tokens present, integers well formed.
/// Ranges are left to [`validate`](super::validate).
pub fn parse(raw: &str) -> Result<Option<RecurrenceRule>, ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut tokens = raw.split(' ');
    let code = tokens.next().unwrap_or_default();
    let kind = RuleKind::from_code(code).ok_or_else(|| ParseError::UnknownKind(code.to_string()))?;

    let missing = || ParseError::MissingGroup {
        kind,
        raw: raw.to_string(),
    };

    let rule = match kind {
        RuleKind::Daily => {
            let token = tokens.next().ok_or_else(missing)?;
            RecurrenceRule::Daily {
                interval: parse_number(token)?,
            }
        }
        RuleKind::Weekly => RecurrenceRule::Weekly {
            weekdays: parse_list(tokens.next().ok_or_else(missing)?)?,
        },
        RuleKind::Monthly => {
            let days = parse_list(tokens.next().ok_or_else(missing)?)?;
            let months = tokens.next().map(parse_list).transpose()?;
            RecurrenceRule::Monthly { days, months }
        }
        RuleKind::Yearly => RecurrenceRule::Yearly,
    };

    if let Some(extra) = tokens.next() {
        return Err(ParseError::UnexpectedToken(extra.to_string()));
    }

    Ok(Some(rule))
}

/// Parses a rule that must be present; the empty string is an unknown kind.
impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse(raw)?.ok_or_else(|| ParseError::UnknownKind(String::new()))
    }
}

fn parse_number(token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

fn parse_list(group: &str) -> Result<Vec<i32>, ParseError> {
    group.split(',').map(parse_number).collect()
}
