//! Task use-case service.
//!
//! # Responsibility
//! - Create tasks with defaults, apply partial updates, delete and list.
//! - Fire galaxy generation on the false -> true completion edge.
//!
//! # Invariants
//! - Exactly one celestial object per processed false -> true edge.
//! - true -> true never spawns; true -> false -> true spawns again.
//! - Create never spawns, even when the task starts completed.
//! - Spawned objects reference a task loaded under the same owner.

use crate::model::galaxy::CelestialObject;
use crate::model::task::{CompletionTransition, Priority, Task, TaskId, TaskPatch};
use crate::model::validation::normalize_optional_date;
use crate::model::UserId;
use crate::repo::galaxy_repo::GalaxyRepository;
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::{RepoError, RepoResult};
use crate::service::galaxy_service::GalaxyService;
use log::info;
use rand::Rng;
use serde::Deserialize;

/// Create-task input; absent fields take model defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Result of one task update.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskUpdateOutcome {
    /// Task state after the update.
    pub task: Task,
    pub transition: CompletionTransition,
    /// Object created by this update, if the task just got completed.
    pub spawned: Option<CelestialObject>,
}

/// Use-case service over a task store and a galaxy store.
pub struct TaskService<T: TaskRepository, G: GalaxyRepository> {
    tasks: T,
    galaxy: GalaxyService<G>,
}

impl<T: TaskRepository, G: GalaxyRepository> TaskService<T, G> {
    pub fn new(tasks: T, galaxy: G) -> Self {
        Self {
            tasks,
            galaxy: GalaxyService::new(galaxy),
        }
    }

    /// Creates a task for `user_id` and returns the stored record.
    pub fn create_task(&self, user_id: UserId, input: &NewTask) -> RepoResult<Task> {
        let mut task = Task::new(user_id, input.title.as_str());
        if let Some(description) = input.description.as_deref() {
            task.description = description.trim().to_string();
        }
        task.date = normalize_optional_date(input.date.as_deref());
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(category) = input.category.as_deref() {
            task.category = category.trim().to_string();
        }
        task.completed = input.completed.unwrap_or(false);

        self.tasks.create_task(&task)?;
        info!(
            "event=task_create module=service status=ok completed={}",
            task.completed
        );
        Ok(task)
    }

    pub fn get_task(&self, user_id: UserId, id: TaskId) -> RepoResult<Option<Task>> {
        self.tasks.get_task(user_id, id)
    }

    pub fn list_tasks(&self, user_id: UserId, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        self.tasks.list_tasks(user_id, query)
    }

    /// Applies `patch` to the task and spawns a celestial object on the
    /// false -> true completion edge.
    ///
    /// # Errors
    /// - `NotFound` when the task is missing or owned by someone else.
    /// - `Validation` when the patched task is invalid; nothing is written.
    pub fn update_task<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: UserId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> RepoResult<TaskUpdateOutcome> {
        let mut task = self
            .tasks
            .get_task(user_id, id)?
            .ok_or(RepoError::NotFound(id))?;

        let transition = patch.apply(&mut task);
        self.tasks.update_task(&task)?;

        let spawned = if transition.spawns_celestial_object() {
            Some(self.galaxy.spawn(rng, user_id, Some(task.id))?)
        } else {
            None
        };

        info!(
            "event=task_update module=service status=ok transition={:?} spawned={}",
            transition,
            spawned.is_some()
        );

        Ok(TaskUpdateOutcome {
            task,
            transition,
            spawned,
        })
    }

    /// Marks the task completed; same spawn rule as `update_task`.
    pub fn complete_task<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: UserId,
        id: TaskId,
    ) -> RepoResult<TaskUpdateOutcome> {
        self.update_task(rng, user_id, id, &TaskPatch::complete())
    }

    /// Deletes the task. Objects it spawned stay in the galaxy.
    pub fn delete_task(&self, user_id: UserId, id: TaskId) -> RepoResult<()> {
        self.tasks.delete_task(user_id, id)?;
        info!("event=task_delete module=service status=ok");
        Ok(())
    }

    pub fn clear_tasks(&self, user_id: UserId) -> RepoResult<usize> {
        let removed = self.tasks.clear_tasks(user_id)?;
        info!("event=task_clear module=service status=ok removed={removed}");
        Ok(removed)
    }

    pub fn galaxy(&self) -> &GalaxyService<G> {
        &self.galaxy
    }
}
