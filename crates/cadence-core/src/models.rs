use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::date::{parse_date, parse_search_date};
use crate::error::CoreError;

/// Default number of tasks returned by a listing.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// A scheduled reminder as stored in the `scheduler` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    /// Scheduled date, `YYYYMMDD`
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Raw recurrence rule; empty for one-off tasks
    pub repeat: String,
}

impl Task {
    /// The scheduled date as a calendar value.
    pub fn scheduled_date(&self) -> Result<NaiveDate, CoreError> {
        parse_date(&self.date)
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    /// `YYYYMMDD`; `None` or empty means today
    pub date: Option<String>,
    pub comment: String,
    pub repeat: String,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: String,
    /// `YYYYMMDD`, empty means today; `None` keeps the stored date as is
    pub date: Option<String>,
    pub comment: String,
    pub repeat: String,
}

/// What to match when listing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSearch {
    /// Substring of the title or comment
    Text(String),
    /// Exact scheduled date
    Date(NaiveDate),
}

impl TaskSearch {
    /// A `DD.MM.YYYY` string searches by date, anything else by text.
    /// Blank input means no search.
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(match parse_search_date(input) {
            Some(date) => TaskSearch::Date(date),
            None => TaskSearch::Text(input.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: Option<TaskSearch>,
    pub limit: u32,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            search: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum CompletionResult {
    /// A one-off task was done and removed
    Removed(Task),
    /// A recurring task was moved to its next date
    Rescheduled { task: Task, previous_date: String },
}
