//! Identity and token boundary.
//!
//! Tokens are opaque UUID strings backed by the `sessions` table:
//! `issue_token` inserts one, `validate_token` resolves it to claims or
//! nothing. Passwords are stored as salted SHA-256 hex digests; there
//! is no password-policy logic here.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::model::{new_id, Claims, User};
use crate::repo;

// Per-deployment salt would come from config in a hardened setup; the
// digest format keeps a constant prefix so hashes are self-describing.
const HASH_PREFIX: &str = "sha256$";

fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{HASH_PREFIX}{salt}${:x}", hasher.finalize())
}

fn verify_password(password: &str, stored: &str) -> bool {
    let Some(rest) = stored.strip_prefix(HASH_PREFIX) else {
        return false;
    };
    let Some((salt, _)) = rest.split_once('$') else {
        return false;
    };
    hash_password(password, salt) == stored
}

/// Register a new user. Duplicate email (case-insensitive) is a
/// `Conflict`; the store's unique index backs the pre-check.
pub fn register(conn: &Connection, username: &str, email: &str, password: &str) -> Result<User> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(Error::InvalidArgument(
            "username, email, and password must not be empty".to_string(),
        ));
    }

    if repo::users::email_exists(conn, email)? {
        return Err(Error::Conflict("email is already registered".to_string()));
    }

    let salt = new_id();
    let user = User {
        id: new_id(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password, &salt),
        created_at: Utc::now(),
    };
    repo::users::insert(conn, &user)?;
    Ok(user)
}

/// Exchange credentials for an opaque bearer token
pub fn login(conn: &Connection, email: &str, password: &str) -> Result<String> {
    let user = repo::users::by_email(conn, email.trim())?
        .filter(|user| verify_password(password, &user.password_hash))
        .ok_or_else(|| Error::Unauthorized("invalid email or password".to_string()))?;
    issue_token(conn, &user.id)
}

/// Issue a fresh token for a known user id
pub fn issue_token(conn: &Connection, user_id: &str) -> Result<String> {
    let token = new_id();
    conn.execute(
        "INSERT INTO sessions (token, user_id, issued_at) VALUES (?1, ?2, ?3)",
        params![token, user_id, Utc::now().to_rfc3339()],
    )?;
    Ok(token)
}

/// Resolve a token to its claims; `None` for unknown or revoked tokens
pub fn validate_token(conn: &Connection, token: &str) -> Result<Option<Claims>> {
    let claims = conn
        .query_row(
            "SELECT u.id, u.username
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.token = ?1",
            params![token],
            |row| {
                Ok(Claims {
                    user_id: row.get(0)?,
                    username: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(claims)
}
