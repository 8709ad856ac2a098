mod support;

use chrono::{TimeZone, Utc};
use support::{create_task, create_user, test_conn};
use taskdeck::model::TaskStatus;
use taskdeck::service::task::{
    create_task as create_task_full, delete_task, task_by_id, task_title_exists, update_task,
    user_tasks, CreateTask, TaskPatch,
};
use taskdeck::Error;

#[test]
fn create_defaults_to_non_started() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");

    let task = create_task(&conn, &user.id, "Ship");
    assert_eq!(task.status, TaskStatus::NonStarted);
    assert_eq!(task.status.as_str(), "Non Started");
    assert!(task.description.is_none());
    assert!(task.due_date.is_none());
}

#[test]
fn create_trims_title_and_description() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");

    let task = create_task_full(
        &conn,
        &user.id,
        CreateTask {
            title: "  Ship  ".to_string(),
            description: Some("  soon  ".to_string()),
            due_date: None,
        },
    )
    .expect("create");
    assert_eq!(task.title, "Ship");
    assert_eq!(task.description.as_deref(), Some("soon"));
}

#[test]
fn duplicate_title_is_case_insensitive_per_user() {
    let conn = test_conn();
    let alice = create_user(&conn, "alice");
    let bob = create_user(&conn, "bob");

    create_task(&conn, &alice.id, "Ship");
    let err = create_task_full(
        &conn,
        &alice.id,
        CreateTask {
            title: "ship".to_string(),
            ..Default::default()
        },
    )
    .expect_err("case-insensitive duplicate");
    assert!(matches!(err, Error::Conflict(_)));

    // Same title for a different user is fine.
    create_task(&conn, &bob.id, "Ship");

    assert!(task_title_exists(&conn, "SHIP", &alice.id).expect("exists"));
    assert!(!task_title_exists(&conn, "Dock", &alice.id).expect("exists"));
}

#[test]
fn blank_title_or_user_rejected() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");

    let blank_title = create_task_full(
        &conn,
        &user.id,
        CreateTask {
            title: "   ".to_string(),
            ..Default::default()
        },
    );
    assert!(matches!(blank_title, Err(Error::InvalidArgument(_))));

    let blank_user = create_task_full(
        &conn,
        "",
        CreateTask {
            title: "Ship".to_string(),
            ..Default::default()
        },
    );
    assert!(matches!(blank_user, Err(Error::InvalidArgument(_))));
}

#[test]
fn update_applies_only_provided_fields() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task_full(
        &conn,
        &user.id,
        CreateTask {
            title: "Ship".to_string(),
            description: Some("original".to_string()),
            due_date: None,
        },
    )
    .expect("create");

    let due = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
    let updated = update_task(
        &conn,
        &task.id,
        TaskPatch {
            title: None,
            description: None,
            due_date: Some(due),
            status: Some("In Progress".to_string()),
        },
    )
    .expect("update");

    assert_eq!(updated.title, "Ship");
    assert_eq!(updated.description.as_deref(), Some("original"));
    assert_eq!(updated.due_date, Some(due));
    assert_eq!(updated.status, TaskStatus::InProgress);
}

#[test]
fn empty_description_is_not_applied() {
    // Known merge-patch limitation: a blank value counts as absent, so a
    // description can never be cleared through an update.
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task_full(
        &conn,
        &user.id,
        CreateTask {
            title: "Ship".to_string(),
            description: Some("keep me".to_string()),
            due_date: None,
        },
    )
    .expect("create");

    let updated = update_task(
        &conn,
        &task.id,
        TaskPatch {
            description: Some("".to_string()),
            ..Default::default()
        },
    )
    .expect("update");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
}

#[test]
fn update_validates_status_against_the_enum() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");

    let err = update_task(
        &conn,
        &task.id,
        TaskPatch {
            status: Some("Done".to_string()),
            ..Default::default()
        },
    )
    .expect_err("unknown status");
    assert!(matches!(err, Error::InvalidArgument(_)));

    for status in ["Paused", "Late", "Finished", "Non Started"] {
        update_task(
            &conn,
            &task.id,
            TaskPatch {
                status: Some(status.to_string()),
                ..Default::default()
            },
        )
        .expect("valid status");
    }
}

#[test]
fn update_title_collision_conflicts_but_case_change_is_allowed() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    create_task(&conn, &user.id, "Ship");
    let dock = create_task(&conn, &user.id, "Dock");

    let err = update_task(
        &conn,
        &dock.id,
        TaskPatch {
            title: Some("ship".to_string()),
            ..Default::default()
        },
    )
    .expect_err("title collision");
    assert!(matches!(err, Error::Conflict(_)));

    // Changing only the casing of its own title must not self-collide.
    let recased = update_task(
        &conn,
        &dock.id,
        TaskPatch {
            title: Some("DOCK".to_string()),
            ..Default::default()
        },
    )
    .expect("recase");
    assert_eq!(recased.title, "DOCK");
}

#[test]
fn update_of_missing_task_is_not_found() {
    let conn = test_conn();
    create_user(&conn, "alice");

    let err = update_task(&conn, "no-such-task", TaskPatch::default()).expect_err("missing");
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn delete_reports_absence_as_false() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");

    assert!(delete_task(&conn, &task.id).expect("delete"));
    assert!(!delete_task(&conn, &task.id).expect("repeat delete"));
    assert!(task_by_id(&conn, &task.id, &user.id)
        .expect("lookup")
        .is_none());
}

#[test]
fn user_tasks_lists_only_own_tasks() {
    let conn = test_conn();
    let alice = create_user(&conn, "alice");
    let bob = create_user(&conn, "bob");
    create_task(&conn, &alice.id, "Ship");
    create_task(&conn, &alice.id, "Dock");
    create_task(&conn, &bob.id, "Ship");

    let alices = user_tasks(&conn, &alice.id).expect("list");
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|t| t.user_id == alice.id));
}
