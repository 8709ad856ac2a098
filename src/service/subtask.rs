//! Subtask service. Ownership is indirect: every check traverses
//! subtask → task → user, and a task owned by someone else looks
//! exactly like a missing one.

use chrono::Utc;
use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::model::{new_id, Subtask};
use crate::repo;

use super::{provided, require_nonblank};

pub fn create_subtask(
    conn: &Connection,
    user_id: &str,
    task_id: &str,
    title: &str,
) -> Result<Subtask> {
    let user_id = require_nonblank(user_id, "user id")?;
    let task_id = require_nonblank(task_id, "task id")?;
    let title = require_nonblank(title, "title")?;

    if repo::tasks::by_id_for_user(conn, task_id, user_id)?.is_none() {
        return Err(Error::NotFound(format!("task '{task_id}' not found")));
    }

    let subtask = Subtask {
        id: new_id(),
        task_id: task_id.to_string(),
        title: title.to_string(),
        created_at: Utc::now(),
    };
    repo::subtasks::insert(conn, &subtask)?;
    Ok(subtask)
}

/// `Ok(None)` when the subtask is absent or its task belongs to someone
/// else
pub fn update_subtask(
    conn: &Connection,
    subtask_id: &str,
    user_id: &str,
    title: Option<&str>,
) -> Result<Option<Subtask>> {
    let Some(mut subtask) = repo::subtasks::by_id(conn, subtask_id, user_id)? else {
        return Ok(None);
    };

    if let Some(title) = provided(title) {
        subtask.title = title.to_string();
    }

    repo::subtasks::update(conn, &subtask)?;
    Ok(Some(subtask))
}

pub fn delete_subtask(conn: &Connection, subtask_id: &str, user_id: &str) -> Result<bool> {
    repo::subtasks::delete(conn, subtask_id, user_id)
}

pub fn subtasks_by_task(conn: &Connection, task_id: &str, user_id: &str) -> Result<Vec<Subtask>> {
    repo::subtasks::by_task(conn, task_id, user_id)
}

pub fn subtask_by_id(
    conn: &Connection,
    subtask_id: &str,
    user_id: &str,
) -> Result<Option<Subtask>> {
    repo::subtasks::by_id(conn, subtask_id, user_id)
}
