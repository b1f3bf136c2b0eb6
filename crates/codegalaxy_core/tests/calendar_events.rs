use codegalaxy_core::db::open_db_in_memory;
use codegalaxy_core::{
    EventListQuery, NewEvent, RepoError, ValidationError, Workspace, DEMO_USER_ID,
};
use uuid::Uuid;

fn event(title: &str, date: &str, time: Option<&str>) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        date: date.to_string(),
        time: time.map(str::to_string),
        category: None,
    }
}

#[test]
fn create_applies_time_and_category_defaults() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);

    let created = workspace
        .create_event(DEMO_USER_ID, &event("Team Meeting", "2024-01-29", None))
        .unwrap();

    assert_eq!(created.time, "00:00");
    assert_eq!(created.category, "Personal");
    let listed = workspace
        .list_events(DEMO_USER_ID, &EventListQuery::default())
        .unwrap();
    assert_eq!(listed, vec![created]);
}

#[test]
fn create_requires_title_and_valid_date_and_time() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);

    assert!(matches!(
        workspace.create_event(DEMO_USER_ID, &event(" ", "2024-01-29", None)),
        Err(RepoError::Validation(ValidationError::EmptyTitle))
    ));
    assert!(matches!(
        workspace.create_event(DEMO_USER_ID, &event("Gym", "", None)),
        Err(RepoError::Validation(ValidationError::InvalidDate(_)))
    ));
    assert!(matches!(
        workspace.create_event(DEMO_USER_ID, &event("Gym", "2024-01-30", Some("7am"))),
        Err(RepoError::Validation(ValidationError::InvalidTime(_)))
    ));
}

#[test]
fn create_rejects_non_ascii_year_and_leaves_month_filter_exact() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);

    assert!(matches!(
        workspace.create_event(
            DEMO_USER_ID,
            &event("Team Meeting", "\u{662}\u{660}\u{662}\u{664}-01-05", None)
        ),
        Err(RepoError::Validation(ValidationError::InvalidDate(_)))
    ));
    assert!(matches!(
        workspace.create_event(DEMO_USER_ID, &event("Gym", "2024-02-30", None)),
        Err(RepoError::Validation(ValidationError::InvalidDate(_)))
    ));
    workspace
        .create_event(DEMO_USER_ID, &event("Team Meeting", "2024-01-05", None))
        .unwrap();

    let january = workspace
        .list_events(
            DEMO_USER_ID,
            &EventListQuery {
                month: Some(1),
                year: Some(2024),
            },
        )
        .unwrap();
    assert_eq!(january.len(), 1);
    assert_eq!(
        workspace
            .list_events(DEMO_USER_ID, &EventListQuery::default())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn list_orders_by_date_then_time() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);
    for (title, date, time) in [
        ("deadline", "2024-02-05", "23:59"),
        ("gym", "2024-01-30", "07:00"),
        ("meeting", "2024-01-29", "14:00"),
        ("standup", "2024-01-29", "09:00"),
    ] {
        workspace
            .create_event(DEMO_USER_ID, &event(title, date, Some(time)))
            .unwrap();
    }

    let titles = workspace
        .list_events(DEMO_USER_ID, &EventListQuery::default())
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, ["standup", "meeting", "gym", "deadline"]);
}

#[test]
fn list_filters_by_month_and_year() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);
    for (title, date) in [
        ("jan 2024", "2024-01-29"),
        ("feb 2024", "2024-02-05"),
        ("jan 2025", "2025-01-10"),
    ] {
        workspace
            .create_event(DEMO_USER_ID, &event(title, date, None))
            .unwrap();
    }

    let jan_2024 = workspace
        .list_events(
            DEMO_USER_ID,
            &EventListQuery {
                month: Some(1),
                year: Some(2024),
            },
        )
        .unwrap();
    assert_eq!(jan_2024.len(), 1);
    assert_eq!(jan_2024[0].title, "jan 2024");

    let any_january = workspace
        .list_events(
            DEMO_USER_ID,
            &EventListQuery {
                month: Some(1),
                year: None,
            },
        )
        .unwrap();
    assert_eq!(any_january.len(), 2);

    let year_2024 = workspace
        .list_events(
            DEMO_USER_ID,
            &EventListQuery {
                month: None,
                year: Some(2024),
            },
        )
        .unwrap();
    assert_eq!(year_2024.len(), 2);
}

#[test]
fn list_rejects_out_of_range_month() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);

    let err = workspace
        .list_events(
            DEMO_USER_ID,
            &EventListQuery {
                month: Some(13),
                year: None,
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidMonth(13))
    ));
}

#[test]
fn delete_event_and_missing_event() {
    let workspace = Workspace::seeded(open_db_in_memory().unwrap(), 1);
    let created = workspace
        .create_event(DEMO_USER_ID, &event("Doctor Appointment", "2024-02-08", Some("10:30")))
        .unwrap();

    workspace.delete_event(DEMO_USER_ID, created.id).unwrap();
    assert!(workspace
        .list_events(DEMO_USER_ID, &EventListQuery::default())
        .unwrap()
        .is_empty());

    let missing = Uuid::new_v4();
    assert!(matches!(
        workspace.delete_event(DEMO_USER_ID, missing),
        Err(RepoError::NotFound(id)) if id == missing
    ));
}
