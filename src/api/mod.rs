//! Thin HTTP surface over the domain services.
//!
//! Handlers translate request input to service calls and domain errors
//! to status codes; no business rules live here. Each request acquires
//! the shared connection for exactly its own duration (scoped
//! acquisition, released on every exit path by the guard).

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::error::{Error, JsonError};
use crate::model::Claims;

mod auth_routes;
mod categories;
mod subtasks;
mod tags;
mod tasks;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Build the full `/api` router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // auth
        .route("/auth/register", post(auth_routes::register))
        .route("/auth/login", post(auth_routes::login))
        // tasks
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/tasks/:id",
            get(tasks::detail).put(tasks::update).delete(tasks::remove),
        )
        .route(
            "/tasks/:id/tags/:tag_id",
            post(tasks::attach_tag).delete(tasks::detach_tag),
        )
        .route(
            "/tasks/:id/categories/:category_id",
            post(tasks::attach_category).delete(tasks::detach_category),
        )
        .route("/tasks/:id/subtasks", get(subtasks::list_for_task))
        // subtasks
        .route("/subtasks", post(subtasks::create))
        .route(
            "/subtasks/:id",
            get(subtasks::detail)
                .put(subtasks::update)
                .delete(subtasks::remove),
        )
        // categories
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id",
            get(categories::detail)
                .put(categories::update)
                .delete(categories::remove),
        )
        // tags
        .route("/tags", get(tags::list).post(tags::create))
        .route(
            "/tags/:id",
            get(tags::detail).put(tags::update).delete(tags::remove),
        );

    Router::new().nest("/api", api).with_state(state)
}

/// Error wrapper implementing `IntoResponse` for handlers
pub struct ApiError(pub Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = JsonError::from(&self.0);
        let status =
            StatusCode::from_u16(body.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Resolve the caller from a `Authorization: Bearer <token>` header
fn authenticate(conn: &Connection, headers: &HeaderMap) -> Result<Claims, Error> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Unauthorized("missing bearer token".to_string()))?;

    crate::auth::validate_token(conn, token)?
        .ok_or_else(|| Error::Unauthorized("invalid token".to_string()))
}

/// 404 body for `Option`-shaped service results; ownership mismatches
/// are indistinguishable from absence by construction
fn not_found(what: &str) -> ApiError {
    ApiError(Error::NotFound(format!("{what} not found")))
}
