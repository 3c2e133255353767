//! Recurrence rule engine.
//!
//! A raw rule string flows through three pure stages:
//!
//! 1. [`parse`] turns the grammar (`d 3`, `y`, `w 1,3`, `m 1,-1 2,8`) into a
//!    [`RecurrenceRule`]
//! 2. [`validate`] checks the values against per-kind ranges
//! 3. [`next_date`] advances an anchor date to the next occurrence not before "now"
//!
//! [`Scheduler`] bundles the stages with the engine configuration.

use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::{CalcError, CoreError};

mod calculator;
mod parser;
mod rule;
mod validator;

pub use calculator::{
    days_in_month, next_date, next_date_within, resolve_month_day, DEFAULT_SCAN_HORIZON_YEARS,
};
pub use parser::parse;
pub use rule::{RecurrenceRule, RuleField, RuleKind};
pub use validator::{validate, INTERVAL_RANGE, MONTH_DAY_RANGE, MONTH_RANGE, WEEKDAY_RANGE};

/// Configuration for the recurrence engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Years a monthly rule is searched ahead before it is declared unsatisfiable
    pub scan_horizon_years: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            scan_horizon_years: DEFAULT_SCAN_HORIZON_YEARS,
        }
    }
}

/// Scheduler: the configured entry point to the recurrence engine.
///
/// Stateless apart from its configuration; safe to share between tasks.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a new Scheduler with the given configuration.
    /// A zero horizon is raised to one year.
    pub fn new(mut config: SchedulerConfig) -> Self {
        config.scan_horizon_years = config.scan_horizon_years.max(1);
        Self { config }
    }

    /// Creates a Scheduler with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SchedulerConfig::default())
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Parses and validates a raw rule. Empty input yields `Ok(None)`.
    pub fn parse_and_validate(&self, raw: &str) -> Result<Option<RecurrenceRule>, CoreError> {
        let rule = parse(raw)?;
        if let Some(rule) = &rule {
            validate(rule)?;
        }
        Ok(rule)
    }

    /// Next occurrence of an already parsed rule.
    pub fn next_for_rule(
        &self,
        rule: &RecurrenceRule,
        anchor: NaiveDate,
        now: NaiveDate,
    ) -> Result<NaiveDate, CalcError> {
        next_date_within(rule, anchor, now, self.config.scan_horizon_years)
    }

    /// Runs the whole pipeline on a raw rule.
    ///
    /// An empty rule has no next date and is reported as invalid input.
    pub fn next_date(&self, raw: &str, anchor: NaiveDate, now: NaiveDate) -> Result<NaiveDate, CoreError> {
        let rule = self
            .parse_and_validate(raw)?
            .ok_or_else(|| CoreError::InvalidInput("recurrence rule is empty".to_string()))?;
        Ok(self.next_for_rule(&rule, anchor, now)?)
    }

    /// Pipeline over boundary strings: `YYYYMMDD` dates in, `YYYYMMDD` out.
    pub fn next_date_str(&self, raw: &str, anchor: &str, now: &str) -> Result<String, CoreError> {
        let anchor = parse_date(anchor)?;
        let now = parse_date(now)?;
        self.next_date(raw, anchor, now).map(format_date)
    }
}
