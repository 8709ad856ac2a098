//! Tag service; mirrors the category service without color handling.

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::model::{new_id, Tag};
use crate::repo;

use super::{provided, require_nonblank};

pub fn create_tag(conn: &Connection, user_id: &str, name: &str) -> Result<Tag> {
    let user_id = require_nonblank(user_id, "user id")?;
    let name = require_nonblank(name, "name")?;

    if repo::tags::name_exists(conn, user_id, name)? {
        return Err(Error::Conflict(format!("tag '{name}' already exists")));
    }

    let tag = Tag {
        id: new_id(),
        user_id: user_id.to_string(),
        name: name.to_string(),
    };
    repo::tags::insert(conn, &tag)?;
    Ok(tag)
}

/// `Ok(None)` when the tag is absent or owned by another user
pub fn update_tag(
    conn: &Connection,
    tag_id: &str,
    user_id: &str,
    name: Option<&str>,
) -> Result<Option<Tag>> {
    let Some(mut tag) = repo::tags::by_id(conn, tag_id, user_id)? else {
        return Ok(None);
    };

    if let Some(name) = provided(name) {
        if name != tag.name {
            if repo::tags::name_exists(conn, user_id, name)? {
                return Err(Error::Conflict(format!("tag '{name}' already exists")));
            }
            tag.name = name.to_string();
        }
    }

    repo::tags::update(conn, &tag)?;
    Ok(Some(tag))
}

pub fn delete_tag(conn: &Connection, tag_id: &str, user_id: &str) -> Result<bool> {
    repo::tags::delete(conn, tag_id, user_id)
}

pub fn user_tags(conn: &Connection, user_id: &str) -> Result<Vec<Tag>> {
    repo::tags::by_user(conn, user_id)
}

pub fn tag_by_id(conn: &Connection, tag_id: &str, user_id: &str) -> Result<Option<Tag>> {
    repo::tags::by_id(conn, tag_id, user_id)
}

pub fn tags_by_task(conn: &Connection, task_id: &str, user_id: &str) -> Result<Vec<Tag>> {
    repo::tags::by_task(conn, task_id, user_id)
}
