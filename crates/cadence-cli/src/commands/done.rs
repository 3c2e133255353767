use anyhow::Result;
use cadence_core::models::CompletionResult;
use cadence_core::repository::Repository;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use crate::cli::DoneCommand;
use crate::views::table::due_label;

pub async fn done_task(repo: &impl Repository, command: DoneCommand, today: NaiveDate) -> Result<()> {
    let success_style = Style::new().green().bold();

    match repo.complete_task(command.id, today).await? {
        CompletionResult::Removed(task) => {
            println!("{} Completed task: {}", "✓".style(success_style), task.title.bright_white().bold());
        }
        CompletionResult::Rescheduled { task, previous_date } => {
            println!(
                "{} Completed task: {}",
                "✓".style(success_style),
                task.title.bright_white().bold()
            );
            let when = task
                .scheduled_date()
                .map(|d| due_label(d, today))
                .unwrap_or_default();
            println!(
                "  {} Next occurrence: {} → {} ({})",
                "↻".blue(),
                previous_date.bright_black(),
                task.date.yellow(),
                when
            );
        }
    }
    Ok(())
}
