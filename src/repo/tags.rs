//! Tag persistence; mirrors the category repository without color.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::map_constraint;
use crate::error::Result;
use crate::model::Tag;

const TAG_COLUMNS: &str = "id, user_id, name";

fn map_tag(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
    })
}

pub fn insert(conn: &Connection, tag: &Tag) -> Result<()> {
    conn.execute(
        "INSERT INTO tags (id, user_id, name) VALUES (?1, ?2, ?3)",
        params![tag.id, tag.user_id, tag.name],
    )
    .map_err(|err| map_constraint(err, "a tag with this name already exists"))?;
    Ok(())
}

pub fn update(conn: &Connection, tag: &Tag) -> Result<bool> {
    let affected = conn
        .execute(
            "UPDATE tags SET name = ?2 WHERE id = ?1",
            params![tag.id, tag.name],
        )
        .map_err(|err| map_constraint(err, "a tag with this name already exists"))?;
    Ok(affected > 0)
}

pub fn delete(conn: &Connection, tag_id: &str, user_id: &str) -> Result<bool> {
    let affected = conn.execute(
        "DELETE FROM tags WHERE id = ?1 AND user_id = ?2",
        params![tag_id, user_id],
    )?;
    Ok(affected > 0)
}

pub fn by_id(conn: &Connection, tag_id: &str, user_id: &str) -> Result<Option<Tag>> {
    let tag = conn
        .query_row(
            &format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = ?1 AND user_id = ?2"),
            params![tag_id, user_id],
            map_tag,
        )
        .optional()?;
    Ok(tag)
}

pub fn by_user(conn: &Connection, user_id: &str) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TAG_COLUMNS} FROM tags WHERE user_id = ?1 ORDER BY id DESC"
    ))?;
    let tags = stmt
        .query_map(params![user_id], map_tag)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tags)
}

pub fn by_task(conn: &Connection, task_id: &str, user_id: &str) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.user_id, g.name
         FROM tags g
         JOIN task_tags tt ON tt.tag_id = g.id
         JOIN tasks t ON t.id = tt.task_id
         WHERE tt.task_id = ?1 AND t.user_id = ?2
         ORDER BY g.id DESC",
    )?;
    let tags = stmt
        .query_map(params![task_id, user_id], map_tag)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tags)
}

pub fn exists(conn: &Connection, tag_id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tags WHERE id = ?1",
        params![tag_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn name_exists(conn: &Connection, user_id: &str, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tags WHERE user_id = ?1 AND name = ?2",
        params![user_id, name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
