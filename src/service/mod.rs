//! Domain services: business rules layered over the repositories.
//!
//! Ownership checks collapse "not found" and "found but not yours" into
//! a single `None`/`false` outcome so the boundary never leaks whether
//! another user's resource exists. Duplicate-name pre-checks here are
//! best-effort; the store's unique indexes settle races.

use crate::error::{Error, Result};

pub mod category;
pub mod subtask;
pub mod tag;
pub mod task;

/// Trim a required field, rejecting empty/whitespace input
pub(crate) fn require_nonblank<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Merge-patch helper: a provided-but-blank string counts as absent.
///
/// This keeps the source convention that optional text fields cannot be
/// cleared to empty through an update.
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
