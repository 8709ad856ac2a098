//! User persistence: identity rows and the process-wide email uniqueness
//! index (case-insensitive via the column collation).

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::map_constraint;
use crate::error::Result;
use crate::model::User;

use super::timestamp_column;

fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: timestamp_column(row, 4)?,
    })
}

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

pub fn insert(conn: &Connection, user: &User) -> Result<()> {
    conn.execute(
        "INSERT INTO users (id, username, email, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user.id,
            user.username,
            user.email,
            user.password_hash,
            user.created_at.to_rfc3339(),
        ],
    )
    .map_err(|err| map_constraint(err, "email is already registered"))?;
    Ok(())
}

pub fn by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    let user = conn
        .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
            params![email],
            map_user,
        )
        .optional()?;
    Ok(user)
}

pub fn email_exists(conn: &Connection, email: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
