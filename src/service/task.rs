//! Task service: CRUD plus task↔tag and task↔category relationship
//! mutation with existence and idempotency guards.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::model::{new_id, Task, TaskStatus};
use crate::repo;

use super::{provided, require_nonblank};

#[derive(Debug, Default, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Merge-patch input for [`update_task`]; blank strings count as absent.
/// Status arrives as its wire string and is validated here, on the
/// update path as well as at creation.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

pub fn create_task(conn: &Connection, user_id: &str, input: CreateTask) -> Result<Task> {
    let user_id = require_nonblank(user_id, "user id")?;
    let title = require_nonblank(&input.title, "title")?;

    if repo::tasks::title_exists(conn, user_id, title)? {
        return Err(Error::Conflict(format!("task '{title}' already exists")));
    }

    let task = Task {
        id: new_id(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        due_date: input.due_date,
        status: TaskStatus::default(),
        created_at: Utc::now(),
    };
    repo::tasks::insert(conn, &task)?;
    Ok(task)
}

/// Apply a merge-patch to a task, keyed by task id alone.
///
/// Fails with `NotFound` when the id is unknown (unlike the category
/// contract, which reports absence as `None`).
pub fn update_task(conn: &Connection, task_id: &str, patch: TaskPatch) -> Result<Task> {
    let Some(mut task) = repo::tasks::by_id(conn, task_id)? else {
        return Err(Error::NotFound(format!("task '{task_id}' not found")));
    };

    if let Some(title) = provided(patch.title.as_deref()) {
        // A casing-only rename matches its own unique index entry, so
        // skip the duplicate check when the titles match ignoring case.
        if !title.eq_ignore_ascii_case(&task.title) {
            if repo::tasks::title_exists(conn, &task.user_id, title)? {
                return Err(Error::Conflict(format!("task '{title}' already exists")));
            }
        }
        task.title = title.to_string();
    }

    if let Some(description) = provided(patch.description.as_deref()) {
        task.description = Some(description.to_string());
    }

    if let Some(due_date) = patch.due_date {
        task.due_date = Some(due_date);
    }

    if let Some(status) = provided(patch.status.as_deref()) {
        task.status = TaskStatus::parse(status)?;
    }

    repo::tasks::update(conn, &task)?;
    Ok(task)
}

/// Delete a task by id, cascading subtasks and join rows.
/// False when the id is unknown.
pub fn delete_task(conn: &Connection, task_id: &str) -> Result<bool> {
    repo::tasks::delete(conn, task_id)
}

pub fn user_tasks(conn: &Connection, user_id: &str) -> Result<Vec<Task>> {
    repo::tasks::by_user(conn, user_id)
}

pub fn task_by_id(conn: &Connection, task_id: &str, user_id: &str) -> Result<Option<Task>> {
    repo::tasks::by_id_for_user(conn, task_id, user_id)
}

/// Case-insensitive per-user title existence check, shared by the
/// create and update paths
pub fn task_title_exists(conn: &Connection, title: &str, user_id: &str) -> Result<bool> {
    repo::tasks::title_exists(conn, user_id, title.trim())
}

// Relationship mutation. Each operation verifies both sides exist
// (NotFound), then lets the join table arbitrate: a duplicate add hits
// the composite primary key (Conflict), a remove that deletes nothing
// is an invalid state.

pub fn add_tag_to_task(conn: &Connection, task_id: &str, tag_id: &str) -> Result<()> {
    ensure_task_exists(conn, task_id)?;
    ensure_tag_exists(conn, tag_id)?;
    repo::tasks::add_tag(conn, task_id, tag_id)
}

pub fn remove_tag_from_task(conn: &Connection, task_id: &str, tag_id: &str) -> Result<()> {
    ensure_task_exists(conn, task_id)?;
    ensure_tag_exists(conn, tag_id)?;
    if !repo::tasks::remove_tag(conn, task_id, tag_id)? {
        return Err(Error::InvalidState(
            "tag is not attached to this task".to_string(),
        ));
    }
    Ok(())
}

pub fn add_category_to_task(conn: &Connection, task_id: &str, category_id: &str) -> Result<()> {
    ensure_task_exists(conn, task_id)?;
    ensure_category_exists(conn, category_id)?;
    repo::tasks::add_category(conn, task_id, category_id)
}

pub fn remove_category_from_task(
    conn: &Connection,
    task_id: &str,
    category_id: &str,
) -> Result<()> {
    ensure_task_exists(conn, task_id)?;
    ensure_category_exists(conn, category_id)?;
    if !repo::tasks::remove_category(conn, task_id, category_id)? {
        return Err(Error::InvalidState(
            "category is not attached to this task".to_string(),
        ));
    }
    Ok(())
}

fn ensure_task_exists(conn: &Connection, task_id: &str) -> Result<()> {
    if !repo::tasks::exists(conn, task_id)? {
        return Err(Error::NotFound(format!("task '{task_id}' not found")));
    }
    Ok(())
}

fn ensure_tag_exists(conn: &Connection, tag_id: &str) -> Result<()> {
    if !repo::tags::exists(conn, tag_id)? {
        return Err(Error::NotFound(format!("tag '{tag_id}' not found")));
    }
    Ok(())
}

fn ensure_category_exists(conn: &Connection, category_id: &str) -> Result<()> {
    if !repo::categories::exists(conn, category_id)? {
        return Err(Error::NotFound(format!(
            "category '{category_id}' not found"
        )));
    }
    Ok(())
}
