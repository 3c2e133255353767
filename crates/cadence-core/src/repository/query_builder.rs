use crate::date::format_date;
use crate::models::{TaskFilter, TaskSearch};
use sqlx::{QueryBuilder, Sqlite};

const TASK_COLUMNS: &str = "SELECT id, date, title, comment, repeat FROM scheduler";

/// Utility functions for building SQL queries from task filters
pub struct SqlQueryBuilder;

impl SqlQueryBuilder {
    /// Build the listing query for a filter, ordered by date then id.
    pub fn build_task_list_query(filter: &TaskFilter) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(TASK_COLUMNS);

        match &filter.search {
            Some(TaskSearch::Text(text)) => {
                let pattern = Self::like_pattern(text);
                qb.push(" WHERE (title LIKE ");
                qb.push_bind(pattern.clone());
                qb.push(" ESCAPE '\\' OR comment LIKE ");
                qb.push_bind(pattern);
                qb.push(" ESCAPE '\\')");
            }
            Some(TaskSearch::Date(date)) => {
                qb.push(" WHERE date = ");
                qb.push_bind(format_date(*date));
            }
            None => {}
        }

        qb.push(" ORDER BY date ASC, id ASC LIMIT ");
        qb.push_bind(i64::from(filter.limit));
        qb
    }

    /// Wraps text in `%` for a substring LIKE, escaping LIKE metacharacters.
    fn like_pattern(text: &str) -> String {
        let mut pattern = String::with_capacity(text.len() + 2);
        pattern.push('%');
        for c in text.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
