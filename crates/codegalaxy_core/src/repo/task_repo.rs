//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide owner-scoped CRUD over the `tasks` table.
//!
//! # Invariants
//! - Writes call `Task::validate()` first.
//! - List order is `date DESC, created_at DESC`, newest insert first on ties.
//! - `created_at` is never rewritten by updates.

use crate::model::task::{Priority, Task, TaskId};
use crate::model::UserId;
use crate::repo::{bool_to_int, parse_uuid_column, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    user_id,
    title,
    description,
    date,
    priority,
    category,
    completed,
    created_at
FROM tasks";

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Query options for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    /// Exact category match; `"all"` or `None` disables the filter.
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn get_task(&self, user_id: UserId, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, user_id: UserId, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    /// Replaces every editable field of a task owned by `task.user_id`.
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    fn delete_task(&self, user_id: UserId, id: TaskId) -> RepoResult<()>;
    /// Deletes every task of `user_id` and returns how many were removed.
    fn clear_tasks(&self, user_id: UserId) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
///
/// Accepts a plain connection or a `Transaction` (via deref).
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (
                uuid,
                user_id,
                title,
                description,
                date,
                priority,
                category,
                completed,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                task.id.to_string(),
                task.user_id,
                task.title.as_str(),
                task.description.as_str(),
                task.date.as_deref(),
                task.priority.as_str(),
                task.category.as_str(),
                bool_to_int(task.completed),
                task.created_at,
            ],
        )?;

        Ok(task.id)
    }

    fn get_task(&self, user_id: UserId, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE uuid = ?1
               AND user_id = ?2;"
        ))?;

        let mut rows = stmt.query(params![id.to_string(), user_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self, user_id: UserId, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE user_id = ?");
        let mut bind_values: Vec<Value> = vec![Value::Integer(user_id)];

        if let Some(category) = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != ALL_CATEGORIES)
        {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.to_string()));
        }

        if let Some(completed) = query.completed {
            sql.push_str(" AND completed = ?");
            bind_values.push(Value::Integer(bool_to_int(completed)));
        }

        sql.push_str(" ORDER BY date DESC, created_at DESC, rowid DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                date = ?3,
                priority = ?4,
                category = ?5,
                completed = ?6
             WHERE uuid = ?7
               AND user_id = ?8;",
            params![
                task.title.as_str(),
                task.description.as_str(),
                task.date.as_deref(),
                task.priority.as_str(),
                task.category.as_str(),
                bool_to_int(task.completed),
                task.id.to_string(),
                task.user_id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id));
        }

        Ok(())
    }

    fn delete_task(&self, user_id: UserId, id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM tasks WHERE uuid = ?1 AND user_id = ?2;",
            params![id.to_string(), user_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn clear_tasks(&self, user_id: UserId) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE user_id = ?1;", [user_id])?;
        Ok(removed)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid_column(&uuid_text, "tasks.uuid")?;

    let priority_text: String = row.get("priority")?;
    let priority = Priority::parse(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in tasks.priority"
        ))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    let task = Task {
        id,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        date: row.get("date")?,
        priority,
        category: row.get("category")?,
        completed,
        created_at: row.get("created_at")?,
    };
    task.validate()?;
    Ok(task)
}
