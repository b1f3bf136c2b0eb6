//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its defaults.
//! - Describe partial updates (`TaskPatch`) and the completion edge they
//!   produce (`CompletionTransition`).
//!
//! # Invariants
//! - `title` and `category` are trimmed and non-empty.
//! - `date`, when set, is a `YYYY-MM-DD` string.
//! - `created_at` is assigned once and never changes on update.

use super::validation::{
    normalize_optional_date, validate_category, validate_date, validate_owner, validate_title,
    ValidationError,
};
use super::{now_epoch_ms, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Category applied when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "Personal";

/// Task urgency label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Storage/wire label (`Low|Medium|High`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses the storage label back into a priority.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    /// Due date as `YYYY-MM-DD`.
    pub date: Option<String>,
    pub priority: Priority,
    pub category: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with default description, priority and category.
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), user_id, title)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by seeding and tests where identity must be known up front.
    pub fn with_id(id: TaskId, user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into().trim().to_string(),
            description: String::new(),
            date: None,
            priority: Priority::default(),
            category: DEFAULT_CATEGORY.to_string(),
            completed: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Checks every field-level invariant of a task.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_owner(self.user_id)?;
        validate_title(&self.title)?;
        validate_category(&self.category)?;
        if let Some(date) = self.date.as_deref() {
            validate_date(date)?;
        }
        Ok(())
    }
}

/// Editable task fields; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Blank string clears the date.
    pub date: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only marks the task as completed.
    pub fn complete() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    /// Applies this patch onto `task` and reports the completion edge.
    ///
    /// The caller is responsible for validating the patched task.
    pub fn apply(&self, task: &mut Task) -> CompletionTransition {
        let was_completed = task.completed;

        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.trim().to_string();
        }
        if let Some(date) = &self.date {
            task.date = normalize_optional_date(Some(date));
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = &self.category {
            task.category = category.trim().to_string();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }

        CompletionTransition::between(was_completed, task.completed)
    }
}

/// Change of the `completed` flag across one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTransition {
    /// false -> true.
    Completed,
    /// true -> false.
    Reopened,
    Unchanged,
}

impl CompletionTransition {
    pub fn between(was_completed: bool, is_completed: bool) -> Self {
        match (was_completed, is_completed) {
            (false, true) => Self::Completed,
            (true, false) => Self::Reopened,
            _ => Self::Unchanged,
        }
    }

    /// Only the false -> true edge spawns a celestial object.
    pub fn spawns_celestial_object(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEMO_USER_ID;

    #[test]
    fn new_task_uses_defaults() {
        let task = Task::new(DEMO_USER_ID, "  Write blog post ");
        assert_eq!(task.title, "Write blog post");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert!(!task.completed);
        assert!(task.date.is_none());
        assert!(task.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_title_and_bad_date() {
        let blank = Task::new(DEMO_USER_ID, "   ");
        assert_eq!(blank.validate(), Err(ValidationError::EmptyTitle));

        let mut bad_date = Task::new(DEMO_USER_ID, "ok");
        bad_date.date = Some("01/02/2024".to_string());
        assert!(matches!(
            bad_date.validate(),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let mut task = Task::new(DEMO_USER_ID, "Read book");
        task.date = Some("2024-01-24".to_string());
        let patch = TaskPatch {
            priority: Some(Priority::High),
            ..TaskPatch::default()
        };

        let transition = patch.apply(&mut task);

        assert_eq!(transition, CompletionTransition::Unchanged);
        assert_eq!(task.title, "Read book");
        assert_eq!(task.date.as_deref(), Some("2024-01-24"));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn patch_with_blank_date_clears_it() {
        let mut task = Task::new(DEMO_USER_ID, "Edit website");
        task.date = Some("2024-02-06".to_string());
        let patch = TaskPatch {
            date: Some(String::new()),
            ..TaskPatch::default()
        };
        patch.apply(&mut task);
        assert!(task.date.is_none());
    }

    #[test]
    fn only_false_to_true_spawns() {
        assert!(CompletionTransition::between(false, true).spawns_celestial_object());
        assert!(!CompletionTransition::between(true, true).spawns_celestial_object());
        assert!(!CompletionTransition::between(true, false).spawns_celestial_object());
        assert!(!CompletionTransition::between(false, false).spawns_celestial_object());
    }

    #[test]
    fn complete_patch_on_completed_task_is_unchanged() {
        let mut task = Task::new(DEMO_USER_ID, "Workout");
        task.completed = true;
        assert_eq!(
            TaskPatch::complete().apply(&mut task),
            CompletionTransition::Unchanged
        );
    }
}
