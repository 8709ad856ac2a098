//! Category service: per-user CRUD with duplicate-name prevention and
//! color normalization.

use rusqlite::Connection;

use crate::color::normalize_color;
use crate::error::{Error, Result};
use crate::model::{new_id, Category};
use crate::repo;

use super::{provided, require_nonblank};

/// Merge-patch input for [`update_category`]; `None` means "leave as is"
#[derive(Debug, Default, Clone)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

pub fn create_category(
    conn: &Connection,
    user_id: &str,
    name: &str,
    color: Option<&str>,
) -> Result<Category> {
    let user_id = require_nonblank(user_id, "user id")?;
    let name = require_nonblank(name, "name")?;

    if repo::categories::name_exists(conn, user_id, name)? {
        return Err(Error::Conflict(format!(
            "category '{name}' already exists"
        )));
    }

    let category = Category {
        id: new_id(),
        user_id: user_id.to_string(),
        name: name.to_string(),
        color: normalize_color(color),
    };
    repo::categories::insert(conn, &category)?;
    Ok(category)
}

/// Update a category the caller owns.
///
/// Returns `Ok(None)` when the category is absent or owned by another
/// user. A blank provided color means "no change", not "reset to
/// default".
pub fn update_category(
    conn: &Connection,
    category_id: &str,
    user_id: &str,
    patch: CategoryPatch,
) -> Result<Option<Category>> {
    let Some(mut category) = repo::categories::by_id(conn, category_id, user_id)? else {
        return Ok(None);
    };

    if let Some(name) = provided(patch.name.as_deref()) {
        // Case-sensitive comparison: renaming only the casing still
        // counts as a change and goes through the duplicate check.
        if name != category.name {
            if repo::categories::name_exists(conn, user_id, name)? {
                return Err(Error::Conflict(format!(
                    "category '{name}' already exists"
                )));
            }
            category.name = name.to_string();
        }
    }

    if let Some(color) = provided(patch.color.as_deref()) {
        category.color = normalize_color(Some(color));
    }

    repo::categories::update(conn, &category)?;
    Ok(Some(category))
}

/// Delete a category the caller owns; join rows cascade away.
/// False when absent or not owned by the caller.
pub fn delete_category(conn: &Connection, category_id: &str, user_id: &str) -> Result<bool> {
    repo::categories::delete(conn, category_id, user_id)
}

pub fn user_categories(conn: &Connection, user_id: &str) -> Result<Vec<Category>> {
    repo::categories::by_user(conn, user_id)
}

pub fn category_by_id(
    conn: &Connection,
    category_id: &str,
    user_id: &str,
) -> Result<Option<Category>> {
    repo::categories::by_id(conn, category_id, user_id)
}

pub fn categories_by_task(
    conn: &Connection,
    task_id: &str,
    user_id: &str,
) -> Result<Vec<Category>> {
    repo::categories::by_task(conn, task_id, user_id)
}
