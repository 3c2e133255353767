use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, TaskFilter, UpdateTaskData};
use crate::recurrence::RecurrenceRule;
use crate::repository::query_builder::SqlQueryBuilder;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let date = self.schedule_date(&data.title, data.date.as_deref(), &data.repeat, today)?;

        let task: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES (?, ?, ?, ?)
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(date)
        .bind(data.title)
        .bind(data.comment)
        .bind(data.repeat)
        .fetch_one(self.pool())
        .await?;

        tracing::info!(id = task.id, date = %task.date, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, CoreError> {
        let mut query_builder = SqlQueryBuilder::build_task_list_query(filter);
        let tasks = query_builder.build_query_as::<Task>().fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn update_task(&self, id: i64, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let current: Task = sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let date = match data.date.as_deref() {
            Some(date) => self.schedule_date(&data.title, Some(date), &data.repeat, today)?,
            None => {
                self.check_fields(&data.title, &data.repeat)?;
                current.date
            }
        };

        let task: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = ?, title = ?, comment = ?, repeat = ?
            WHERE id = ?
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(date)
        .bind(data.title)
        .bind(data.comment)
        .bind(data.repeat)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(id, date = %task.date, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        tracing::info!(id, "task deleted");
        Ok(())
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let rule = match self.scheduler().parse_and_validate(&task.repeat)? {
            Some(rule) => rule,
            None => {
                sqlx::query("DELETE FROM scheduler WHERE id = ?")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                tracing::info!(id, "one-off task done and removed");
                return Ok(CompletionResult::Removed(task));
            }
        };

        let next = self
            .scheduler()
            .next_for_rule(&rule, task.scheduled_date()?, today)?;

        let rescheduled: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = ?
            WHERE id = ?
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(format_date(next))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(id, from = %task.date, to = %rescheduled.date, "recurring task rescheduled");

        Ok(CompletionResult::Rescheduled {
            task: rescheduled,
            previous_date: task.date,
        })
    }
}

impl SqliteRepository {
    /// Rejects a blank title and returns the parsed, validated repeat rule.
    fn check_fields(&self, title: &str, repeat: &str) -> Result<Option<RecurrenceRule>, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::InvalidInput("task title is required".to_string()));
        }
        self.scheduler().parse_and_validate(repeat)
    }

    /// Checks a task's fields and works out the date to store.
    ///
    /// # Behavior
    /// - title must not be blank
    /// - the repeat rule must parse and validate (empty means one-off)
    /// - missing or empty date means `today`
    /// - a date before `today` becomes `today` (one-off) or the rule's next
    ///   occurrence (recurring)
    fn schedule_date(
        &self,
        title: &str,
        date: Option<&str>,
        repeat: &str,
        today: NaiveDate,
    ) -> Result<String, CoreError> {
        let rule = self.check_fields(title, repeat)?;

        let requested = match date.filter(|d| !d.is_empty()) {
            Some(d) => parse_date(d)?,
            None => today,
        };

        let scheduled = if requested >= today {
            requested
        } else {
            match rule {
                Some(rule) => self.scheduler().next_for_rule(&rule, requested, today)?,
                None => today,
            }
        };

        Ok(format_date(scheduled))
    }
}
