mod support;

use support::{count_rows, create_task, create_user, test_conn};
use taskdeck::service::category::{create_category, delete_category};
use taskdeck::service::subtask::create_subtask;
use taskdeck::service::tag::{create_tag, delete_tag};
use taskdeck::service::task::{add_category_to_task, add_tag_to_task, delete_task, task_by_id};

#[test]
fn deleting_a_task_cascades_subtasks_and_join_rows() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let tag = create_tag(&conn, &user.id, "urgent").expect("tag");
    let category = create_category(&conn, &user.id, "Work", None).expect("category");

    create_subtask(&conn, &user.id, &task.id, "step 1").expect("subtask");
    create_subtask(&conn, &user.id, &task.id, "step 2").expect("subtask");
    add_tag_to_task(&conn, &task.id, &tag.id).expect("attach tag");
    add_category_to_task(&conn, &task.id, &category.id).expect("attach category");

    assert_eq!(count_rows(&conn, "subtasks"), 2);
    assert_eq!(count_rows(&conn, "task_tags"), 1);
    assert_eq!(count_rows(&conn, "task_categories"), 1);

    assert!(delete_task(&conn, &task.id).expect("delete task"));

    assert_eq!(count_rows(&conn, "subtasks"), 0);
    assert_eq!(count_rows(&conn, "task_tags"), 0);
    assert_eq!(count_rows(&conn, "task_categories"), 0);
    // Tag and category themselves survive.
    assert_eq!(count_rows(&conn, "tags"), 1);
    assert_eq!(count_rows(&conn, "categories"), 1);
}

#[test]
fn deleting_a_category_removes_only_its_join_rows() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let category = create_category(&conn, &user.id, "Work", None).expect("category");
    let tag = create_tag(&conn, &user.id, "urgent").expect("tag");

    add_category_to_task(&conn, &task.id, &category.id).expect("attach category");
    add_tag_to_task(&conn, &task.id, &tag.id).expect("attach tag");

    assert!(delete_category(&conn, &category.id, &user.id).expect("delete category"));

    assert_eq!(count_rows(&conn, "task_categories"), 0);
    // Unrelated rows and the task itself are untouched.
    assert_eq!(count_rows(&conn, "task_tags"), 1);
    assert!(task_by_id(&conn, &task.id, &user.id)
        .expect("lookup")
        .is_some());
}

#[test]
fn deleting_a_tag_removes_only_its_join_rows() {
    let conn = test_conn();
    let user = create_user(&conn, "alice");
    let task = create_task(&conn, &user.id, "Ship");
    let tag = create_tag(&conn, &user.id, "urgent").expect("tag");

    add_tag_to_task(&conn, &task.id, &tag.id).expect("attach tag");
    assert!(delete_tag(&conn, &tag.id, &user.id).expect("delete tag"));

    assert_eq!(count_rows(&conn, "task_tags"), 0);
    assert!(task_by_id(&conn, &task.id, &user.id)
        .expect("lookup")
        .is_some());
}
