mod support;

use support::{create_task, create_user, test_conn};
use taskdeck::service::category::{categories_by_task, create_category};
use taskdeck::service::tag::{create_tag, tags_by_task};
use taskdeck::service::task::{
    add_category_to_task, add_tag_to_task, remove_category_from_task, remove_tag_from_task,
};
use taskdeck::Error;

#[test]
fn tag_attach_detach_lifecycle() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let tag = create_tag(&conn, &user.id, "urgent").expect("create tag");

    add_tag_to_task(&conn, &task.id, &tag.id).expect("attach");

    // Second attach of the same pair is a conflict.
    let err = add_tag_to_task(&conn, &task.id, &tag.id).expect_err("duplicate attach");
    assert!(matches!(err, Error::Conflict(_)));

    remove_tag_from_task(&conn, &task.id, &tag.id).expect("detach");

    // Detaching an unassociated pair is an invalid state.
    let err = remove_tag_from_task(&conn, &task.id, &tag.id).expect_err("repeat detach");
    assert!(matches!(err, Error::InvalidState(_)));
}

#[test]
fn category_attach_detach_lifecycle() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let category = create_category(&conn, &user.id, "Work", None).expect("create category");

    add_category_to_task(&conn, &task.id, &category.id).expect("attach");
    let err = add_category_to_task(&conn, &task.id, &category.id).expect_err("duplicate attach");
    assert!(matches!(err, Error::Conflict(_)));

    remove_category_from_task(&conn, &task.id, &category.id).expect("detach");
    let err =
        remove_category_from_task(&conn, &task.id, &category.id).expect_err("repeat detach");
    assert!(matches!(err, Error::InvalidState(_)));
}

#[test]
fn attach_requires_both_sides_to_exist() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let tag = create_tag(&conn, &user.id, "urgent").expect("create tag");

    assert!(matches!(
        add_tag_to_task(&conn, "no-such-task", &tag.id),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        add_tag_to_task(&conn, &task.id, "no-such-tag"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        add_category_to_task(&conn, &task.id, "no-such-category"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        remove_tag_from_task(&conn, "no-such-task", &tag.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn task_scoped_listings_reflect_attachments() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let urgent = create_tag(&conn, &user.id, "urgent").expect("tag");
    let later = create_tag(&conn, &user.id, "later").expect("tag");
    let work = create_category(&conn, &user.id, "Work", Some("#ff0000")).expect("category");

    add_tag_to_task(&conn, &task.id, &urgent.id).expect("attach urgent");
    add_tag_to_task(&conn, &task.id, &later.id).expect("attach later");
    add_category_to_task(&conn, &task.id, &work.id).expect("attach work");

    let tags = tags_by_task(&conn, &task.id, &user.id).expect("tags");
    assert_eq!(tags.len(), 2);

    let categories = categories_by_task(&conn, &task.id, &user.id).expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Work");
    assert_eq!(categories[0].color, "#FF0000");

    // A different user sees nothing through the task-scoped queries.
    let bob = create_user(&conn, "bob");
    assert!(tags_by_task(&conn, &task.id, &bob.id)
        .expect("tags")
        .is_empty());
    assert!(categories_by_task(&conn, &task.id, &bob.id)
        .expect("categories")
        .is_empty());
}
