use anyhow::Result;
use cadence_core::models::NewTaskData;
use cadence_core::repository::Repository;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::parser::parse_date_input;
use crate::views::table::{describe_repeat, due_label};

pub async fn add_task(repo: &impl Repository, command: AddCommand, today: NaiveDate) -> Result<()> {
    let date = command
        .date
        .as_deref()
        .map(|d| parse_date_input(d, today))
        .transpose()?;

    let new_task_data = NewTaskData {
        title: command.title,
        date,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };

    let added_task = repo.add_task(new_task_data, today).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Added task #{}: {}",
        "✓".style(success_style),
        added_task.id.to_string().yellow(),
        added_task.title.bright_white().bold()
    );
    if let Ok(date) = added_task.scheduled_date() {
        println!(
            "  {} Scheduled for {} ({})",
            "→".style(info_style),
            added_task.date,
            due_label(date, today)
        );
    }
    if added_task.is_recurring() {
        println!(
            "  {} Repeats {}",
            "→".style(info_style),
            describe_repeat(&added_task.repeat)
        );
    }
    Ok(())
}
