//! Demo data for a fresh install.
//!
//! # Invariants
//! - Seeding only runs when the owner has no tasks; it never duplicates.
//! - Each sample task that starts completed gets exactly one linked object,
//!   matching what completing it through the API would have produced.

use crate::model::event::CalendarEvent;
use crate::model::task::{Priority, Task};
use crate::model::UserId;
use crate::repo::event_repo::{EventRepository, SqliteEventRepository};
use crate::repo::galaxy_repo::SqliteGalaxyRepository;
use crate::repo::task_repo::{SqliteTaskRepository, TaskListQuery, TaskRepository};
use crate::repo::RepoResult;
use crate::service::galaxy_service::GalaxyService;
use log::info;
use rand::Rng;
use rusqlite::Connection;

struct SampleTask {
    title: &'static str,
    description: &'static str,
    date: &'static str,
    priority: Priority,
    category: &'static str,
    completed: bool,
}

const SAMPLE_TASKS: &[SampleTask] = &[
    SampleTask {
        title: "Write blog post",
        description: "Complete article on productivity",
        date: "2024-01-25",
        priority: Priority::High,
        category: "Work",
        completed: false,
    },
    SampleTask {
        title: "Manage Finance",
        description: "Review monthly budget",
        date: "2024-02-01",
        priority: Priority::High,
        category: "Personal",
        completed: false,
    },
    SampleTask {
        title: "Edit Website",
        description: "Update portfolio page",
        date: "2024-02-06",
        priority: Priority::Medium,
        category: "Work",
        completed: false,
    },
    SampleTask {
        title: "Create Social Content",
        description: "Design Instagram posts",
        date: "2024-01-30",
        priority: Priority::Medium,
        category: "Work",
        completed: false,
    },
    SampleTask {
        title: "Workout routine",
        description: "Morning exercise",
        date: "2024-01-23",
        priority: Priority::High,
        category: "Life",
        completed: true,
    },
    SampleTask {
        title: "Read book",
        description: "Finish current chapter",
        date: "2024-01-24",
        priority: Priority::Low,
        category: "Personal",
        completed: true,
    },
];

/// (title, date, time, category)
const SAMPLE_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("Team Meeting", "2024-01-29", "14:00", "Work"),
    ("Gym Session", "2024-01-30", "07:00", "Life"),
    ("Project Deadline", "2024-02-05", "23:59", "Work"),
    ("Doctor Appointment", "2024-02-08", "10:30", "Personal"),
];

/// Counts of rows written by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub tasks: usize,
    pub events: usize,
    pub objects: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        self.tasks == 0 && self.events == 0 && self.objects == 0
    }
}

/// Seeds sample tasks, events and galaxy objects for `user_id`.
///
/// Returns an empty summary when the owner already has tasks. Callers
/// should run this inside a transaction.
pub fn seed_demo_data<R: Rng + ?Sized>(
    conn: &Connection,
    rng: &mut R,
    user_id: UserId,
) -> RepoResult<SeedSummary> {
    let tasks = SqliteTaskRepository::new(conn);
    if !tasks
        .list_tasks(user_id, &TaskListQuery::default())?
        .is_empty()
    {
        info!("event=demo_seed module=service status=skipped reason=tasks_present");
        return Ok(SeedSummary::default());
    }

    let events = SqliteEventRepository::new(conn);
    let galaxy = GalaxyService::new(SqliteGalaxyRepository::new(conn));
    let mut summary = SeedSummary::default();

    for sample in SAMPLE_TASKS {
        let mut task = Task::new(user_id, sample.title);
        task.description = sample.description.to_string();
        task.date = Some(sample.date.to_string());
        task.priority = sample.priority;
        task.category = sample.category.to_string();
        task.completed = sample.completed;
        tasks.create_task(&task)?;
        summary.tasks += 1;

        if task.completed {
            galaxy.spawn(rng, user_id, Some(task.id))?;
            summary.objects += 1;
        }
    }

    for (title, date, time, category) in SAMPLE_EVENTS {
        let mut event = CalendarEvent::new(user_id, *title, *date);
        event.time = (*time).to_string();
        event.category = (*category).to_string();
        events.create_event(&event)?;
        summary.events += 1;
    }

    info!(
        "event=demo_seed module=service status=ok tasks={} events={} objects={}",
        summary.tasks, summary.events, summary.objects
    );
    Ok(summary)
}
