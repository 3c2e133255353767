use anyhow::Result;
use cadence_core::date::format_date;
use cadence_core::recurrence::Scheduler;
use chrono::NaiveDate;

use crate::cli::NextDateCommand;
use crate::parser::parse_strict_date;

/// Prints the next occurrence of `command.repeat` after `command.date`,
/// not before `command.now` (or `today`).
pub fn next_date(scheduler: &Scheduler, command: NextDateCommand, today: NaiveDate) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(now) => parse_strict_date(now)?,
        None => today,
    };
    let anchor = parse_strict_date(&command.date)?;
    let next = scheduler.next_date(&command.repeat, anchor, now)?;
    println!("{}", format_date(next));
    Ok(())
}
