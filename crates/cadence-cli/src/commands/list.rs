use anyhow::Result;
use cadence_core::models::{TaskFilter, TaskSearch};
use cadence_core::repository::Repository;
use chrono::NaiveDate;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::display_tasks;

pub async fn list_tasks(
    repo: &impl Repository,
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let filter = TaskFilter {
        search: command.search.as_deref().and_then(TaskSearch::from_input),
        limit: command.limit.unwrap_or(config.list_limit),
    };

    let tasks = repo.find_tasks(&filter).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        display_tasks(&tasks, today);
    }
    Ok(())
}
