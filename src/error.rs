//! Error types for taskdeck
//!
//! HTTP status classes per the API contract:
//! - 400: Invalid argument (missing/blank required input)
//! - 404: Referenced entity absent (ownership mismatch folds in here)
//! - 409: Conflict (uniqueness violation, duplicate association) and
//!   invalid-state relationship removal
//! - 500: Storage or serialization failure

use thiserror::Error;

/// HTTP status codes surfaced at the API boundary
pub mod status_codes {
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const NOT_FOUND: u16 = 404;
    pub const CONFLICT: u16 = 409;
    pub const INTERNAL: u16 = 500;
}

/// Main error type for taskdeck operations
#[derive(Error, Debug)]
pub enum Error {
    // Caller errors (400)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Auth failures (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Absent entities (404); "found but not yours" is deliberately
    // indistinguishable from "not found"
    #[error("Not found: {0}")]
    NotFound(String),

    // Uniqueness and association conflicts (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    // Operation failures (500)
    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidArgument(_) | Error::InvalidConfig(_) => status_codes::BAD_REQUEST,

            Error::Unauthorized(_) => status_codes::UNAUTHORIZED,

            Error::NotFound(_) => status_codes::NOT_FOUND,

            Error::Conflict(_) | Error::InvalidState(_) => status_codes::CONFLICT,

            Error::Sqlite(_) | Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => {
                status_codes::INTERNAL
            }
        }
    }
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for serializing errors in API responses
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: u16,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        let code = err.status_code();
        // Never echo internal failure detail to clients.
        let error = if code == status_codes::INTERNAL {
            "internal error".to_string()
        } else {
            err.to_string()
        };
        JsonError { error, code }
    }
}
