//! Calendar use-case service.

use crate::model::event::{CalendarEvent, EventId};
use crate::model::UserId;
use crate::repo::event_repo::{EventListQuery, EventRepository};
use crate::repo::RepoResult;
use serde::Deserialize;

/// Create-event input; absent fields take model defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub category: Option<String>,
}

pub struct CalendarService<E: EventRepository> {
    repo: E,
}

impl<E: EventRepository> CalendarService<E> {
    pub fn new(repo: E) -> Self {
        Self { repo }
    }

    /// Creates one event for `user_id`, defaulting time to `00:00`.
    pub fn create_event(&self, user_id: UserId, input: &NewEvent) -> RepoResult<CalendarEvent> {
        let mut event = CalendarEvent::new(user_id, input.title.as_str(), input.date.as_str());
        if let Some(time) = input.time.as_deref() {
            event.time = time.trim().to_string();
        }
        if let Some(category) = input.category.as_deref() {
            event.category = category.trim().to_string();
        }
        self.repo.create_event(&event)?;
        Ok(event)
    }

    pub fn list_events(
        &self,
        user_id: UserId,
        query: &EventListQuery,
    ) -> RepoResult<Vec<CalendarEvent>> {
        self.repo.list_events(user_id, query)
    }

    pub fn delete_event(&self, user_id: UserId, id: EventId) -> RepoResult<()> {
        self.repo.delete_event(user_id, id)
    }
}
