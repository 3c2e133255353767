use thiserror::Error;

use crate::recurrence::{RuleField, RuleKind};

/// Malformed recurrence grammar. Carries the offending fragment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown recurrence kind: '{0}'")]
    UnknownKind(String),

    #[error("Recurrence rule '{raw}' is missing its {kind} value group")]
    MissingGroup { kind: RuleKind, raw: String },

    #[error("Unexpected token in recurrence rule: '{0}'")]
    UnexpectedToken(String),

    #[error("Not an integer in recurrence rule: '{0}'")]
    InvalidNumber(String),
}

/// Well-formed rule whose values fall outside what its kind allows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} rule: {field} value {value} is out of range")]
    OutOfRange {
        kind: RuleKind,
        field: RuleField,
        value: i32,
    },

    #[error("{kind} rule: {field} must not be empty")]
    Empty { kind: RuleKind, field: RuleField },

    #[error("{kind} rule: {field} value {value} is listed more than once")]
    Duplicate {
        kind: RuleKind,
        field: RuleField,
        value: i32,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Rule '{rule}' has no occurrence within {horizon_years} years")]
    NoOccurrence { rule: String, horizon_years: u32 },

    #[error("Rule did not pass validation: {0}")]
    InvalidRule(#[from] ValidationError),

    #[error("Next date is outside the representable calendar range")]
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{0}', expected YYYYMMDD")]
    InvalidDate(String),

    #[error("Invalid recurrence rule: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid recurrence rule: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot compute next date: {0}")]
    Calc(#[from] CalcError),
}
