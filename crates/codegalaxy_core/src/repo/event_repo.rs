//! Calendar event repository contracts and SQLite implementation.
//!
//! # Invariants
//! - List order is `date ASC, time ASC`, insertion order on ties.
//! - `month`/`year` filters each apply independently.

use crate::model::event::{CalendarEvent, EventId};
use crate::model::validation::ValidationError;
use crate::model::UserId;
use crate::repo::{parse_uuid_column, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const EVENT_SELECT_SQL: &str = "SELECT
    uuid,
    user_id,
    title,
    date,
    time,
    category,
    created_at
FROM calendar_events";

/// Query options for listing calendar events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventListQuery {
    /// Month of year, 1-12.
    pub month: Option<u32>,
    pub year: Option<u32>,
}

pub trait EventRepository {
    fn create_event(&self, event: &CalendarEvent) -> RepoResult<EventId>;
    fn list_events(&self, user_id: UserId, query: &EventListQuery)
        -> RepoResult<Vec<CalendarEvent>>;
    fn delete_event(&self, user_id: UserId, id: EventId) -> RepoResult<()>;
}

/// SQLite-backed calendar event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, event: &CalendarEvent) -> RepoResult<EventId> {
        event.validate()?;

        self.conn.execute(
            "INSERT INTO calendar_events (
                uuid,
                user_id,
                title,
                date,
                time,
                category,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                event.id.to_string(),
                event.user_id,
                event.title.as_str(),
                event.date.as_str(),
                event.time.as_str(),
                event.category.as_str(),
                event.created_at,
            ],
        )?;

        Ok(event.id)
    }

    fn list_events(
        &self,
        user_id: UserId,
        query: &EventListQuery,
    ) -> RepoResult<Vec<CalendarEvent>> {
        let mut sql = format!("{EVENT_SELECT_SQL} WHERE user_id = ?");
        let mut bind_values: Vec<Value> = vec![Value::Integer(user_id)];

        if let Some(month) = query.month {
            if !(1..=12).contains(&month) {
                return Err(ValidationError::InvalidMonth(month).into());
            }
            sql.push_str(" AND substr(date, 6, 2) = ?");
            bind_values.push(Value::Text(format!("{month:02}")));
        }

        if let Some(year) = query.year {
            sql.push_str(" AND substr(date, 1, 4) = ?");
            bind_values.push(Value::Text(format!("{year:04}")));
        }

        sql.push_str(" ORDER BY date ASC, time ASC, rowid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }

    fn delete_event(&self, user_id: UserId, id: EventId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM calendar_events WHERE uuid = ?1 AND user_id = ?2;",
            params![id.to_string(), user_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<CalendarEvent> {
    let uuid_text: String = row.get("uuid")?;
    let event = CalendarEvent {
        id: parse_uuid_column(&uuid_text, "calendar_events.uuid")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        date: row.get("date")?,
        time: row.get("time")?,
        category: row.get("category")?,
        created_at: row.get("created_at")?,
    };
    event.validate()?;
    Ok(event)
}
