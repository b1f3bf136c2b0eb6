//! Core domain logic for CodeGalaxy.
//! This crate is the single source of truth for task, calendar and galaxy
//! invariants; outer crates only translate transport to `Workspace` calls.

pub mod db;
pub mod galaxy;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod workspace;

pub use galaxy::generator::{generate_celestial_object, STAR_PROBABILITY};
pub use logging::{default_log_dir, default_log_level, init_logging};
pub use model::event::{CalendarEvent, EventId};
pub use model::galaxy::{CelestialId, CelestialKind, CelestialObject, Position};
pub use model::task::{CompletionTransition, Priority, Task, TaskId, TaskPatch};
pub use model::validation::ValidationError;
pub use model::{UserId, DEMO_USER_ID};
pub use repo::event_repo::EventListQuery;
pub use repo::task_repo::TaskListQuery;
pub use repo::{RepoError, RepoResult};
pub use service::calendar_service::NewEvent;
pub use service::demo_seed::SeedSummary;
pub use service::task_service::{NewTask, TaskUpdateOutcome};
pub use workspace::Workspace;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
