//! Repository layer: per-entity data access over SQLite.
//!
//! Functions take the connection explicitly; absence translates to
//! `Option`/`false` rather than an error, and unique-index hits surface
//! as `Error::Conflict` via [`crate::db::map_constraint`]. Business
//! rules (ownership folding, duplicate pre-checks, merge-patch) live in
//! the service layer, not here.

use chrono::{DateTime, Utc};
use rusqlite::Row;

pub mod categories;
pub mod subtasks;
pub mod tags;
pub mod tasks;
pub mod users;

/// Read an RFC 3339 timestamp column
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(err),
            )
        })
}

/// Read a nullable RFC 3339 timestamp column
pub(crate) fn optional_timestamp_column(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(
                    idx,
                    rusqlite::types::Type::Text,
                    Box::new(err),
                )
            }),
    }
}
