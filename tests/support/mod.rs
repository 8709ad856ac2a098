//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rusqlite::Connection;
use taskdeck::model::{Task, User};
use taskdeck::service::task::{self, CreateTask};
use taskdeck::{auth, db};

/// Fresh in-memory database with the full schema
pub fn test_conn() -> Connection {
    db::open_in_memory().expect("in-memory db")
}

/// Register a user with a derived email and a fixed password
pub fn create_user(conn: &Connection, name: &str) -> User {
    auth::register(conn, name, &format!("{name}@example.com"), "password").expect("register user")
}

/// Create a task owned by `user_id` with defaults
pub fn create_task(conn: &Connection, user_id: &str, title: &str) -> Task {
    task::create_task(
        conn,
        user_id,
        CreateTask {
            title: title.to_string(),
            ..Default::default()
        },
    )
    .expect("create task")
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count rows")
}
