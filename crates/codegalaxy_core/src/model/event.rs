//! Calendar event model.
//!
//! # Invariants
//! - `date` is required (`YYYY-MM-DD`); `time` is `HH:MM` and defaults to
//!   midnight.

use super::task::DEFAULT_CATEGORY;
use super::validation::{
    validate_category, validate_date, validate_owner, validate_time, ValidationError,
};
use super::{now_epoch_ms, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EventId = Uuid;

/// Time applied when the caller omits one.
pub const DEFAULT_EVENT_TIME: &str = "00:00";

/// Calendar entry owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub user_id: UserId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub created_at: i64,
}

impl CalendarEvent {
    /// Creates an event at midnight in the default category.
    pub fn new(user_id: UserId, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into().trim().to_string(),
            date: date.into().trim().to_string(),
            time: DEFAULT_EVENT_TIME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_owner(self.user_id)?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        validate_date(&self.date)?;
        validate_time(&self.time)?;
        validate_category(&self.category)?;
        Ok(())
    }
}
