use anyhow::Result;
use cadence_core::error::CoreError;
use cadence_core::models::UpdateTaskData;
use cadence_core::repository::Repository;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use crate::cli::EditCommand;
use crate::parser::parse_date_input;

/// Applies the given fields on top of the stored task; omitted fields keep
/// their current values.
pub async fn edit_task(repo: &impl Repository, command: EditCommand, today: NaiveDate) -> Result<()> {
    let current = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    let date = command
        .date
        .as_deref()
        .map(|d| parse_date_input(d, today))
        .transpose()?;
    let repeat = if command.repeat_clear {
        String::new()
    } else {
        command.repeat.unwrap_or_else(|| current.repeat.clone())
    };

    let update = UpdateTaskData {
        title: command.title.unwrap_or_else(|| current.title.clone()),
        date,
        comment: command.comment.unwrap_or_else(|| current.comment.clone()),
        repeat,
    };

    let updated = repo.update_task(command.id, update, today).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Updated task #{}: {}",
        "✓".style(success_style),
        updated.id.to_string().yellow(),
        updated.title.bright_white().bold()
    );
    if updated.date != current.date {
        println!("  {} → {}", current.date.bright_black(), updated.date);
    }
    Ok(())
}
