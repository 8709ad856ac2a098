//! Domain entities for taskdeck.
//!
//! All IDs are opaque UUID-v4 strings generated at creation time.
//! Timestamps are `DateTime<Utc>` serialized as RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Generate a fresh opaque entity ID
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Task lifecycle status.
///
/// Wire strings use the display form ("Non Started", "In Progress", ...).
/// Parsing is case-insensitive and lives here so both the create and
/// update paths validate against the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Non Started")]
    NonStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Paused,
    Late,
    Finished,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::NonStarted,
        TaskStatus::InProgress,
        TaskStatus::Paused,
        TaskStatus::Late,
        TaskStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NonStarted => "Non Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Paused => "Paused",
            TaskStatus::Late => "Late",
            TaskStatus::Finished => "Finished",
        }
    }

    /// Parse a status string, rejecting anything outside the enum
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown task status '{trimmed}'")))
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NonStarted
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered account owning tasks, categories, and tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Child item of exactly one task; ownership is indirect via the task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub task_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub user_id: String,
    pub name: String,
}

/// Claims carried by a validated bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_strings() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_serializes_to_display_form() {
        let json = serde_json::to_string(&TaskStatus::NonStarted).unwrap();
        assert_eq!(json, "\"Non Started\"");
        let back: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn status_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            TaskStatus::parse("  non started ").unwrap(),
            TaskStatus::NonStarted
        );
        assert_eq!(TaskStatus::parse("FINISHED").unwrap(), TaskStatus::Finished);
    }

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert!(TaskStatus::parse("Done").is_err());
        assert!(TaskStatus::parse("").is_err());
    }

    #[test]
    fn default_status_is_non_started() {
        assert_eq!(TaskStatus::default(), TaskStatus::NonStarted);
        assert_eq!(TaskStatus::default().as_str(), "Non Started");
    }
}
