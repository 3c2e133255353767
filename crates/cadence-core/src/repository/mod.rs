use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, TaskFilter, UpdateTaskData};
use crate::recurrence::Scheduler;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod query_builder;
pub mod tasks;

/// Task storage plus the flows that schedule tasks through the recurrence engine.
///
/// Operations that depend on the current date take it as `today` so callers
/// decide what "now" is.
#[async_trait]
pub trait TaskRepository {
    /// Validates and stores a new task. A missing date means `today`; a past
    /// date becomes `today` for one-off tasks or the next occurrence for
    /// recurring ones.
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Tasks ordered by date, at most `filter.limit` of them.
    async fn find_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, CoreError>;
    /// Replaces a task's fields. A given date follows the same rules as
    /// `add_task`; a `None` date keeps the stored date untouched.
    async fn update_task(&self, id: i64, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Marks a task done: one-off tasks are removed, recurring ones move to
    /// their next date.
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository: TaskRepository {}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
    scheduler: Scheduler,
}

impl SqliteRepository {
    pub fn new(pool: DbPool, scheduler: Scheduler) -> Self {
        Self { pool, scheduler }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}

impl Repository for SqliteRepository {}
