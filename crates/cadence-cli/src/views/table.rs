use cadence_core::models::Task;
use cadence_core::recurrence::{parse, RecurrenceRule};
use chrono::{Duration, NaiveDate};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use owo_colors::OwoColorize;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Due", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let date = task.scheduled_date().ok();
        row.add_cell(Cell::new(
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| task.date.clone()),
        ));

        let due_cell = match date {
            Some(d) if d < today => Cell::new(due_label(d, today)).fg(Color::Red),
            Some(d) if d == today => Cell::new(due_label(d, today))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
            Some(d) => Cell::new(due_label(d, today)),
            None => Cell::new("invalid date").fg(Color::DarkGrey),
        };
        row.add_cell(due_cell);

        let mut title = String::new();
        if task.is_recurring() {
            title.push_str("↻ ");
        }
        title.push_str(&task.title);
        row.add_cell(Cell::new(title));

        row.add_cell(Cell::new(describe_repeat(&task.repeat)));
        row.add_cell(Cell::new(&task.comment).fg(Color::DarkGrey));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task(task: &Task, today: NaiveDate) {
    println!("{} {}", format!("#{}", task.id).yellow(), task.title.bright_white().bold());

    match task.scheduled_date() {
        Ok(date) => println!(
            "  {} {} ({})",
            "Date:".bright_black(),
            date.format("%Y-%m-%d"),
            due_label(date, today)
        ),
        Err(_) => println!("  {} {}", "Date:".bright_black(), task.date),
    }
    if task.is_recurring() {
        println!(
            "  {} {} ({})",
            "Repeat:".bright_black(),
            describe_repeat(&task.repeat),
            task.repeat.cyan()
        );
    }
    if !task.comment.is_empty() {
        println!("  {} {}", "Comment:".bright_black(), task.comment);
    }
}

/// "today", "tomorrow", or a humanized offset like "in 3 weeks".
pub fn due_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        days => Duration::days(days).humanize(),
    }
}

/// Human description of a stored rule; falls back to the raw text if it no
/// longer parses.
pub fn describe_repeat(raw: &str) -> String {
    match parse(raw) {
        Ok(Some(rule)) => describe_rule(&rule),
        Ok(None) => String::new(),
        Err(_) => raw.to_string(),
    }
}

pub fn describe_rule(rule: &RecurrenceRule) -> String {
    match rule {
        RecurrenceRule::Daily { interval: 1 } => "every day".to_string(),
        RecurrenceRule::Daily { interval } => format!("every {} days", interval),
        RecurrenceRule::Yearly => "every year".to_string(),
        RecurrenceRule::Weekly { weekdays } => {
            format!("weekly on {}", names(weekdays, &WEEKDAY_NAMES))
        }
        RecurrenceRule::Monthly { days, months } => {
            let days = days
                .iter()
                .map(|day| match day {
                    -1 => "last day".to_string(),
                    -2 => "second-to-last day".to_string(),
                    d => d.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            match months {
                Some(months) => format!("monthly on {} in {}", days, names(months, &MONTH_NAMES)),
                None => format!("monthly on {}", days),
            }
        }
    }
}

fn names(values: &[i32], table: &[&str]) -> String {
    values
        .iter()
        .map(|v| {
            usize::try_from(*v - 1)
                .ok()
                .and_then(|i| table.get(i))
                .map(|name| name.to_string())
                .unwrap_or_else(|| v.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
