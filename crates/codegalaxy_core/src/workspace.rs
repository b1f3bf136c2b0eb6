//! Explicit application handle.
//!
//! # Responsibility
//! - Own one migrated SQLite connection and the random source used for
//!   galaxy generation.
//! - Expose every use case as a method so outer layers never touch SQL.
//!
//! # Invariants
//! - Task updates and the object they spawn commit in one transaction.
//! - No process-wide state: callers construct and inject the workspace.

use crate::model::event::{CalendarEvent, EventId};
use crate::model::galaxy::CelestialObject;
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::model::UserId;
use crate::repo::event_repo::{EventListQuery, SqliteEventRepository};
use crate::repo::galaxy_repo::SqliteGalaxyRepository;
use crate::repo::task_repo::{SqliteTaskRepository, TaskListQuery};
use crate::repo::user_repo::ensure_user;
use crate::repo::RepoResult;
use crate::service::calendar_service::{CalendarService, NewEvent};
use crate::service::demo_seed::{seed_demo_data, SeedSummary};
use crate::service::task_service::{NewTask, TaskService, TaskUpdateOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rusqlite::Connection;

type SqliteTaskService<'conn> =
    TaskService<SqliteTaskRepository<'conn>, SqliteGalaxyRepository<'conn>>;

pub struct Workspace {
    conn: Connection,
    rng: SmallRng,
}

impl Workspace {
    /// Wraps a migrated connection and an explicit random source.
    pub fn new(conn: Connection, rng: SmallRng) -> Self {
        Self { conn, rng }
    }

    /// Wraps a migrated connection with an entropy-seeded random source.
    pub fn from_entropy(conn: Connection) -> Self {
        Self::new(conn, SmallRng::from_entropy())
    }

    /// Wraps a migrated connection with a deterministic random source.
    pub fn seeded(conn: Connection, seed: u64) -> Self {
        Self::new(conn, SmallRng::seed_from_u64(seed))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates the owner row if this is the first run for `user_id`.
    pub fn ensure_owner(&self, user_id: UserId, username: &str) -> RepoResult<bool> {
        ensure_user(&self.conn, user_id, username)
    }

    pub fn create_task(&self, user_id: UserId, input: &NewTask) -> RepoResult<Task> {
        task_service(&self.conn).create_task(user_id, input)
    }

    pub fn get_task(&self, user_id: UserId, id: TaskId) -> RepoResult<Option<Task>> {
        task_service(&self.conn).get_task(user_id, id)
    }

    pub fn list_tasks(&self, user_id: UserId, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        task_service(&self.conn).list_tasks(user_id, query)
    }

    /// Applies a partial update; spawns a celestial object on false -> true.
    pub fn update_task(
        &mut self,
        user_id: UserId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> RepoResult<TaskUpdateOutcome> {
        let tx = self.conn.transaction()?;
        let outcome = {
            let service = task_service(&tx);
            service.update_task(&mut self.rng, user_id, id, patch)?
        };
        tx.commit()?;
        Ok(outcome)
    }

    /// Marks a task completed; spawns only if it was open.
    pub fn complete_task(&mut self, user_id: UserId, id: TaskId) -> RepoResult<TaskUpdateOutcome> {
        self.update_task(user_id, id, &TaskPatch::complete())
    }

    pub fn delete_task(&self, user_id: UserId, id: TaskId) -> RepoResult<()> {
        task_service(&self.conn).delete_task(user_id, id)
    }

    pub fn clear_tasks(&self, user_id: UserId) -> RepoResult<usize> {
        task_service(&self.conn).clear_tasks(user_id)
    }

    pub fn create_event(&self, user_id: UserId, input: &NewEvent) -> RepoResult<CalendarEvent> {
        calendar_service(&self.conn).create_event(user_id, input)
    }

    pub fn list_events(
        &self,
        user_id: UserId,
        query: &EventListQuery,
    ) -> RepoResult<Vec<CalendarEvent>> {
        calendar_service(&self.conn).list_events(user_id, query)
    }

    pub fn delete_event(&self, user_id: UserId, id: EventId) -> RepoResult<()> {
        calendar_service(&self.conn).delete_event(user_id, id)
    }

    /// Lists the owner's galaxy, oldest object first.
    pub fn list_galaxy(&self, user_id: UserId) -> RepoResult<Vec<CelestialObject>> {
        task_service(&self.conn).galaxy().list_objects(user_id)
    }

    /// Seeds demo rows in one transaction when the owner has no tasks yet.
    pub fn seed_demo_data(&mut self, user_id: UserId) -> RepoResult<SeedSummary> {
        let tx = self.conn.transaction()?;
        let summary = seed_demo_data(&tx, &mut self.rng, user_id)?;
        tx.commit()?;
        Ok(summary)
    }
}

fn task_service(conn: &Connection) -> SqliteTaskService<'_> {
    TaskService::new(
        SqliteTaskRepository::new(conn),
        SqliteGalaxyRepository::new(conn),
    )
}

fn calendar_service(conn: &Connection) -> CalendarService<SqliteEventRepository<'_>> {
    CalendarService::new(SqliteEventRepository::new(conn))
}
