//! Task endpoints, including relationship attach/detach routes.
//!
//! The service keys update/delete/relationship mutation by task id
//! alone, so these handlers resolve the id through the caller's
//! ownership scope first; other users' tasks stay indistinguishable
//! from missing ones.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Task, TaskStatus};
use crate::service::task::{self, CreateTask, TaskPatch};
use crate::service::{category, subtask, tag};

use super::categories::CategoryResponse;
use super::subtasks::SubtaskResponse;
use super::tags::TagResponse;
use super::{authenticate, not_found, ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

/// Detail projection embedding subtasks, categories, and tags
#[derive(Debug, Serialize)]
pub struct TaskDetailResponse {
    #[serde(flatten)]
    pub task: TaskResponse,
    pub subtasks: Vec<SubtaskResponse>,
    pub categories: Vec<CategoryResponse>,
    pub tags: Vec<TagResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let tasks = task::user_tasks(&conn, &claims.user_id)?;
    Ok(Json(
        tasks
            .into_iter()
            .map(TaskResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateTaskInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let created = task::create_task(
        &conn,
        &claims.user_id,
        CreateTask {
            title: input.title,
            description: input.description,
            due_date: input.due_date,
        },
    )?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

pub async fn detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let found =
        task::task_by_id(&conn, &id, &claims.user_id)?.ok_or_else(|| not_found("task"))?;

    let subtasks = subtask::subtasks_by_task(&conn, &id, &claims.user_id)?;
    let categories = category::categories_by_task(&conn, &id, &claims.user_id)?;
    let tags = tag::tags_by_task(&conn, &id, &claims.user_id)?;

    Ok(Json(TaskDetailResponse {
        task: TaskResponse::from(found),
        subtasks: subtasks.into_iter().map(SubtaskResponse::from).collect(),
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
        tags: tags.into_iter().map(TagResponse::from).collect(),
    }))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<UpdateTaskInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;

    let updated = task::update_task(
        &conn,
        &id,
        TaskPatch {
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
        },
    )?;
    Ok(Json(TaskResponse::from(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;

    if !task::delete_task(&conn, &id)? {
        return Err(not_found("task"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn attach_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, tag_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;
    task::add_tag_to_task(&conn, &id, &tag_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn detach_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, tag_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;
    task::remove_tag_from_task(&conn, &id, &tag_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn attach_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, category_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;
    task::add_category_to_task(&conn, &id, &category_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn detach_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, category_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    resolve_own_task(&conn, &id, &claims.user_id)?;
    task::remove_category_from_task(&conn, &id, &category_id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn resolve_own_task(
    conn: &rusqlite::Connection,
    task_id: &str,
    user_id: &str,
) -> Result<(), super::ApiError> {
    task::task_by_id(conn, task_id, user_id)?
        .map(|_| ())
        .ok_or_else(|| not_found("task"))
}
