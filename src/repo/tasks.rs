//! Task persistence, including the task↔tag and task↔category join
//! tables. Join-pair uniqueness is the composite primary key; a
//! duplicate add comes back as `Conflict`, and a remove reports whether
//! a row was actually deleted so the service can flag invalid state.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::map_constraint;
use crate::error::Result;
use crate::model::{Task, TaskStatus};

use super::{optional_timestamp_column, timestamp_column};

const TASK_COLUMNS: &str = "id, user_id, title, description, due_date, status, created_at";

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status_raw: String = row.get(5)?;
    let status = TaskStatus::parse(&status_raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: optional_timestamp_column(row, 4)?,
        status,
        created_at: timestamp_column(row, 6)?,
    })
}

pub fn insert(conn: &Connection, task: &Task) -> Result<()> {
    conn.execute(
        "INSERT INTO tasks (id, user_id, title, description, due_date, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            task.id,
            task.user_id,
            task.title,
            task.description,
            task.due_date.map(|dt| dt.to_rfc3339()),
            task.status.as_str(),
            task.created_at.to_rfc3339(),
        ],
    )
    .map_err(|err| map_constraint(err, "a task with this title already exists"))?;
    Ok(())
}

/// Write back a merged task row; false when the id is unknown
pub fn update(conn: &Connection, task: &Task) -> Result<bool> {
    let affected = conn
        .execute(
            "UPDATE tasks
             SET title = ?2, description = ?3, due_date = ?4, status = ?5
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.description,
                task.due_date.map(|dt| dt.to_rfc3339()),
                task.status.as_str(),
            ],
        )
        .map_err(|err| map_constraint(err, "a task with this title already exists"))?;
    Ok(affected > 0)
}

/// Delete by id; subtasks and join rows go with it via cascade
pub fn delete(conn: &Connection, task_id: &str) -> Result<bool> {
    let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![task_id])?;
    Ok(affected > 0)
}

pub fn by_id(conn: &Connection, task_id: &str) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
            params![task_id],
            map_task,
        )
        .optional()?;
    Ok(task)
}

/// Ownership-scoped lookup: absent and not-owned are the same `None`
pub fn by_id_for_user(conn: &Connection, task_id: &str, user_id: &str) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
            params![task_id, user_id],
            map_task,
        )
        .optional()?;
    Ok(task)
}

pub fn by_user(conn: &Connection, user_id: &str) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = ?1 ORDER BY created_at DESC, id"
    ))?;
    let tasks = stmt
        .query_map(params![user_id], map_task)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tasks)
}

pub fn exists(conn: &Connection, task_id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE id = ?1",
        params![task_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Case-insensitive per-user title existence check
pub fn title_exists(conn: &Connection, user_id: &str, title: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE user_id = ?1 AND title = ?2 COLLATE NOCASE",
        params![user_id, title],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

// Join-table mutation

pub fn add_tag(conn: &Connection, task_id: &str, tag_id: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO task_tags (task_id, tag_id) VALUES (?1, ?2)",
        params![task_id, tag_id],
    )
    .map_err(|err| map_constraint(err, "tag is already attached to this task"))?;
    Ok(())
}

pub fn remove_tag(conn: &Connection, task_id: &str, tag_id: &str) -> Result<bool> {
    let affected = conn.execute(
        "DELETE FROM task_tags WHERE task_id = ?1 AND tag_id = ?2",
        params![task_id, tag_id],
    )?;
    Ok(affected > 0)
}

pub fn add_category(conn: &Connection, task_id: &str, category_id: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO task_categories (task_id, category_id) VALUES (?1, ?2)",
        params![task_id, category_id],
    )
    .map_err(|err| map_constraint(err, "category is already attached to this task"))?;
    Ok(())
}

pub fn remove_category(conn: &Connection, task_id: &str, category_id: &str) -> Result<bool> {
    let affected = conn.execute(
        "DELETE FROM task_categories WHERE task_id = ?1 AND category_id = ?2",
        params![task_id, category_id],
    )?;
    Ok(affected > 0)
}
