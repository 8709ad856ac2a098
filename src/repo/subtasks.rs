//! Subtask persistence. A subtask is owned by a user only indirectly,
//! through its parent task, so every scoped query joins `tasks` and
//! filters on `tasks.user_id`.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::model::Subtask;

use super::timestamp_column;

fn map_subtask(row: &Row<'_>) -> rusqlite::Result<Subtask> {
    Ok(Subtask {
        id: row.get(0)?,
        task_id: row.get(1)?,
        title: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
    })
}

pub fn insert(conn: &Connection, subtask: &Subtask) -> Result<()> {
    conn.execute(
        "INSERT INTO subtasks (id, task_id, title, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            subtask.id,
            subtask.task_id,
            subtask.title,
            subtask.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, subtask: &Subtask) -> Result<bool> {
    let affected = conn.execute(
        "UPDATE subtasks SET title = ?2 WHERE id = ?1",
        params![subtask.id, subtask.title],
    )?;
    Ok(affected > 0)
}

/// Delete scoped through the owning task's user
pub fn delete(conn: &Connection, subtask_id: &str, user_id: &str) -> Result<bool> {
    let affected = conn.execute(
        "DELETE FROM subtasks
         WHERE id = ?1
           AND task_id IN (SELECT id FROM tasks WHERE user_id = ?2)",
        params![subtask_id, user_id],
    )?;
    Ok(affected > 0)
}

pub fn by_id(conn: &Connection, subtask_id: &str, user_id: &str) -> Result<Option<Subtask>> {
    let subtask = conn
        .query_row(
            "SELECT s.id, s.task_id, s.title, s.created_at
             FROM subtasks s
             JOIN tasks t ON t.id = s.task_id
             WHERE s.id = ?1 AND t.user_id = ?2",
            params![subtask_id, user_id],
            map_subtask,
        )
        .optional()?;
    Ok(subtask)
}

pub fn by_task(conn: &Connection, task_id: &str, user_id: &str) -> Result<Vec<Subtask>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.task_id, s.title, s.created_at
         FROM subtasks s
         JOIN tasks t ON t.id = s.task_id
         WHERE s.task_id = ?1 AND t.user_id = ?2
         ORDER BY s.created_at, s.id",
    )?;
    let subtasks = stmt
        .query_map(params![task_id, user_id], map_subtask)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(subtasks)
}
