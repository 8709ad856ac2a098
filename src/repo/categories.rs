//! Category persistence. Name uniqueness per user is the `(user_id,
//! name)` unique constraint; mutation is scoped by owner where the
//! service contract folds not-found and not-owned together.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::map_constraint;
use crate::error::Result;
use crate::model::Category;

const CATEGORY_COLUMNS: &str = "id, user_id, name, color";

fn map_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        color: row.get(3)?,
    })
}

pub fn insert(conn: &Connection, category: &Category) -> Result<()> {
    conn.execute(
        "INSERT INTO categories (id, user_id, name, color) VALUES (?1, ?2, ?3, ?4)",
        params![category.id, category.user_id, category.name, category.color],
    )
    .map_err(|err| map_constraint(err, "a category with this name already exists"))?;
    Ok(())
}

pub fn update(conn: &Connection, category: &Category) -> Result<bool> {
    let affected = conn
        .execute(
            "UPDATE categories SET name = ?2, color = ?3 WHERE id = ?1",
            params![category.id, category.name, category.color],
        )
        .map_err(|err| map_constraint(err, "a category with this name already exists"))?;
    Ok(affected > 0)
}

/// Owner-scoped delete; join rows cascade
pub fn delete(conn: &Connection, category_id: &str, user_id: &str) -> Result<bool> {
    let affected = conn.execute(
        "DELETE FROM categories WHERE id = ?1 AND user_id = ?2",
        params![category_id, user_id],
    )?;
    Ok(affected > 0)
}

pub fn by_id(conn: &Connection, category_id: &str, user_id: &str) -> Result<Option<Category>> {
    let category = conn
        .query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1 AND user_id = ?2"),
            params![category_id, user_id],
            map_category,
        )
        .optional()?;
    Ok(category)
}

/// All categories for a user, descending ID (insertion-order proxy)
pub fn by_user(conn: &Connection, user_id: &str) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE user_id = ?1 ORDER BY id DESC"
    ))?;
    let categories = stmt
        .query_map(params![user_id], map_category)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(categories)
}

/// Categories attached to a task, restricted to tasks the user owns
pub fn by_task(conn: &Connection, task_id: &str, user_id: &str) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.user_id, c.name, c.color
         FROM categories c
         JOIN task_categories tc ON tc.category_id = c.id
         JOIN tasks t ON t.id = tc.task_id
         WHERE tc.task_id = ?1 AND t.user_id = ?2
         ORDER BY c.id DESC",
    )?;
    let categories = stmt
        .query_map(params![task_id, user_id], map_category)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(categories)
}

pub fn exists(conn: &Connection, category_id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM categories WHERE id = ?1",
        params![category_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn name_exists(conn: &Connection, user_id: &str, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM categories WHERE user_id = ?1 AND name = ?2",
        params![user_id, name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
