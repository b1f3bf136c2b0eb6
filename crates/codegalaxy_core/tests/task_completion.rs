use codegalaxy_core::db::open_db_in_memory;
use codegalaxy_core::repo::galaxy_repo::{GalaxyRepository, SqliteGalaxyRepository};
use codegalaxy_core::repo::task_repo::SqliteTaskRepository;
use codegalaxy_core::service::task_service::TaskService;
use codegalaxy_core::{
    CompletionTransition, NewTask, RepoError, RepoResult, TaskPatch, Workspace, DEMO_USER_ID,
};
use codegalaxy_core::{CelestialId, CelestialObject, UserId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn workspace() -> Workspace {
    Workspace::seeded(open_db_in_memory().unwrap(), 2024)
}

fn completed(value: bool) -> TaskPatch {
    TaskPatch {
        completed: Some(value),
        ..TaskPatch::default()
    }
}

#[test]
fn completing_open_task_spawns_exactly_one_linked_object() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("X"))
        .unwrap();
    let before = workspace.list_galaxy(DEMO_USER_ID).unwrap().len();

    let outcome = workspace
        .update_task(DEMO_USER_ID, task.id, &completed(true))
        .unwrap();

    assert_eq!(outcome.transition, CompletionTransition::Completed);
    assert!(outcome.task.completed);
    let spawned = outcome.spawned.expect("completion should spawn an object");
    assert_eq!(spawned.task_id, Some(task.id));

    let galaxy = workspace.list_galaxy(DEMO_USER_ID).unwrap();
    assert_eq!(galaxy.len(), before + 1);
    assert_eq!(galaxy.last().unwrap(), &spawned);
}

#[test]
fn completing_already_completed_task_spawns_nothing() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("X"))
        .unwrap();
    workspace
        .update_task(DEMO_USER_ID, task.id, &completed(true))
        .unwrap();

    let again = workspace
        .update_task(DEMO_USER_ID, task.id, &completed(true))
        .unwrap();
    let via_complete = workspace.complete_task(DEMO_USER_ID, task.id).unwrap();

    assert_eq!(again.transition, CompletionTransition::Unchanged);
    assert!(again.spawned.is_none());
    assert!(via_complete.spawned.is_none());
    assert_eq!(workspace.list_galaxy(DEMO_USER_ID).unwrap().len(), 1);
}

#[test]
fn reopen_then_complete_spawns_again() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("Workout routine"))
        .unwrap();

    workspace
        .update_task(DEMO_USER_ID, task.id, &completed(true))
        .unwrap();
    let reopened = workspace
        .update_task(DEMO_USER_ID, task.id, &completed(false))
        .unwrap();
    let recompleted = workspace
        .update_task(DEMO_USER_ID, task.id, &completed(true))
        .unwrap();

    assert_eq!(reopened.transition, CompletionTransition::Reopened);
    assert!(reopened.spawned.is_none());
    assert!(recompleted.spawned.is_some());

    let galaxy = workspace.list_galaxy(DEMO_USER_ID).unwrap();
    assert_eq!(galaxy.len(), 2);
    assert!(galaxy.iter().all(|object| object.task_id == Some(task.id)));
}

#[test]
fn edits_without_completion_change_never_spawn() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("Edit Website"))
        .unwrap();

    let patch = TaskPatch {
        title: Some("Edit Website again".to_string()),
        completed: Some(false),
        ..TaskPatch::default()
    };
    let outcome = workspace.update_task(DEMO_USER_ID, task.id, &patch).unwrap();

    assert_eq!(outcome.transition, CompletionTransition::Unchanged);
    assert!(workspace.list_galaxy(DEMO_USER_ID).unwrap().is_empty());
}

#[test]
fn creating_completed_task_does_not_spawn() {
    let workspace = workspace();
    let input = NewTask {
        completed: Some(true),
        ..NewTask::titled("Done already")
    };

    let task = workspace.create_task(DEMO_USER_ID, &input).unwrap();

    assert!(task.completed);
    assert!(workspace.list_galaxy(DEMO_USER_ID).unwrap().is_empty());
}

#[test]
fn spawned_object_outlives_its_task() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("Read book"))
        .unwrap();
    let spawned = workspace
        .complete_task(DEMO_USER_ID, task.id)
        .unwrap()
        .spawned
        .unwrap();

    workspace.delete_task(DEMO_USER_ID, task.id).unwrap();

    let galaxy = workspace.list_galaxy(DEMO_USER_ID).unwrap();
    assert_eq!(galaxy.len(), 1);
    assert_eq!(galaxy[0], spawned);
    assert_eq!(galaxy[0].task_id, Some(task.id));
}

#[test]
fn clearing_tasks_leaves_objects_untouched() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("Create Social Content"))
        .unwrap();
    let spawned = workspace
        .complete_task(DEMO_USER_ID, task.id)
        .unwrap()
        .spawned
        .unwrap();

    assert_eq!(workspace.clear_tasks(DEMO_USER_ID).unwrap(), 1);

    assert_eq!(workspace.list_galaxy(DEMO_USER_ID).unwrap(), vec![spawned]);
}

#[test]
fn reopening_keeps_previous_objects() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("Manage Finance"))
        .unwrap();
    workspace.complete_task(DEMO_USER_ID, task.id).unwrap();

    workspace
        .update_task(DEMO_USER_ID, task.id, &completed(false))
        .unwrap();

    assert_eq!(workspace.list_galaxy(DEMO_USER_ID).unwrap().len(), 1);
}

#[test]
fn galaxy_list_is_oldest_first() {
    let mut workspace = workspace();
    let mut spawned = Vec::new();
    for title in ["one", "two", "three"] {
        let task = workspace
            .create_task(DEMO_USER_ID, &NewTask::titled(title))
            .unwrap();
        let object = workspace
            .complete_task(DEMO_USER_ID, task.id)
            .unwrap()
            .spawned
            .unwrap();
        spawned.push(object.id);
    }

    let listed = workspace
        .list_galaxy(DEMO_USER_ID)
        .unwrap()
        .into_iter()
        .map(|object| object.id)
        .collect::<Vec<_>>();
    assert_eq!(listed, spawned);
    assert_eq!(
        workspace.list_galaxy(DEMO_USER_ID).unwrap(),
        workspace.list_galaxy(DEMO_USER_ID).unwrap()
    );
}

/// Galaxy store that always fails, to check propagation.
struct FailingGalaxy;

impl GalaxyRepository for FailingGalaxy {
    fn insert_object(&self, _object: &CelestialObject) -> RepoResult<CelestialId> {
        Err(RepoError::InvalidData("galaxy store offline".to_string()))
    }

    fn list_objects(&self, _user_id: UserId) -> RepoResult<Vec<CelestialObject>> {
        Ok(Vec::new())
    }

    fn count_objects(&self, _user_id: UserId) -> RepoResult<usize> {
        Ok(0)
    }
}

#[test]
fn galaxy_store_failure_propagates_from_update() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn), FailingGalaxy);
    let task = service
        .create_task(DEMO_USER_ID, &NewTask::titled("X"))
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(5);

    let err = service
        .update_task(&mut rng, DEMO_USER_ID, task.id, &completed(true))
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn failed_spawn_rolls_back_completion_in_workspace() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("X"))
        .unwrap();
    workspace
        .connection()
        .execute_batch(
            "CREATE TRIGGER reject_galaxy BEFORE INSERT ON galaxy_objects
             BEGIN SELECT RAISE(ABORT, 'galaxy store offline'); END;",
        )
        .unwrap();

    let err = workspace.complete_task(DEMO_USER_ID, task.id).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    let stored = workspace.get_task(DEMO_USER_ID, task.id).unwrap().unwrap();
    assert!(!stored.completed);
}

#[test]
fn galaxy_count_tracks_spawns() {
    let mut workspace = workspace();
    let task = workspace
        .create_task(DEMO_USER_ID, &NewTask::titled("count me"))
        .unwrap();
    workspace.complete_task(DEMO_USER_ID, task.id).unwrap();

    let repo = SqliteGalaxyRepository::new(workspace.connection());
    assert_eq!(repo.count_objects(DEMO_USER_ID).unwrap(), 1);
}
