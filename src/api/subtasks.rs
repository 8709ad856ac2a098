//! Subtask endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Subtask;
use crate::service::subtask;

use super::{authenticate, not_found, ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct SubtaskResponse {
    pub id: String,
    pub task_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Subtask> for SubtaskResponse {
    fn from(subtask: Subtask) -> Self {
        Self {
            id: subtask.id,
            task_id: subtask.task_id,
            title: subtask.title,
            created_at: subtask.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSubtaskInput {
    pub task_id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubtaskInput {
    pub title: Option<String>,
}

pub async fn list_for_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let subtasks = subtask::subtasks_by_task(&conn, &task_id, &claims.user_id)?;
    Ok(Json(
        subtasks
            .into_iter()
            .map(SubtaskResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateSubtaskInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let created = subtask::create_subtask(&conn, &claims.user_id, &input.task_id, &input.title)?;
    Ok((StatusCode::CREATED, Json(SubtaskResponse::from(created))))
}

pub async fn detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let found = subtask::subtask_by_id(&conn, &id, &claims.user_id)?
        .ok_or_else(|| not_found("subtask"))?;
    Ok(Json(SubtaskResponse::from(found)))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<UpdateSubtaskInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let updated = subtask::update_subtask(&conn, &id, &claims.user_id, input.title.as_deref())?
        .ok_or_else(|| not_found("subtask"))?;
    Ok(Json(SubtaskResponse::from(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    if !subtask::delete_subtask(&conn, &id, &claims.user_id)? {
        return Err(not_found("subtask"));
    }
    Ok(StatusCode::NO_CONTENT)
}
