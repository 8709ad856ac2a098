//! Tag endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::model::Tag;
use crate::service::tag;

use super::{authenticate, not_found, ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTagInput {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTagInput {
    pub name: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let tags = tag::user_tags(&conn, &claims.user_id)?;
    Ok(Json(
        tags.into_iter().map(TagResponse::from).collect::<Vec<_>>(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateTagInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let created = tag::create_tag(&conn, &claims.user_id, &input.name)?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(created))))
}

pub async fn detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let found = tag::tag_by_id(&conn, &id, &claims.user_id)?.ok_or_else(|| not_found("tag"))?;
    Ok(Json(TagResponse::from(found)))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<UpdateTagInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let updated = tag::update_tag(&conn, &id, &claims.user_id, input.name.as_deref())?
        .ok_or_else(|| not_found("tag"))?;
    Ok(Json(TagResponse::from(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    if !tag::delete_tag(&conn, &id, &claims.user_id)? {
        return Err(not_found("tag"));
    }
    Ok(StatusCode::NO_CONTENT)
}
