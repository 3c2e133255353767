use anyhow::Result;
use cadence_core::error::CoreError;
use cadence_core::repository::Repository;
use chrono::NaiveDate;

use crate::cli::ShowCommand;
use crate::views::table::display_task;

pub async fn show_task(repo: &impl Repository, command: ShowCommand, today: NaiveDate) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        display_task(&task, today);
    }
    Ok(())
}
