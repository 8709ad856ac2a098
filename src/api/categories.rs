//! Category endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::service::category::{self, CategoryPatch};

use super::{authenticate, not_found, ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            color: category.color,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub color: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let categories = category::user_categories(&conn, &claims.user_id)?;
    Ok(Json(
        categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateCategoryInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let created =
        category::create_category(&conn, &claims.user_id, &input.name, input.color.as_deref())?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(created))))
}

pub async fn detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let found = category::category_by_id(&conn, &id, &claims.user_id)?
        .ok_or_else(|| not_found("category"))?;
    Ok(Json(CategoryResponse::from(found)))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategoryInput>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    let patch = CategoryPatch {
        name: input.name,
        color: input.color,
    };
    let updated = category::update_category(&conn, &id, &claims.user_id, patch)?
        .ok_or_else(|| not_found("category"))?;
    Ok(Json(CategoryResponse::from(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let conn = state.db.lock().await;
    let claims = authenticate(&conn, &headers)?;
    if !category::delete_category(&conn, &id, &claims.user_id)? {
        return Err(not_found("category"));
    }
    Ok(StatusCode::NO_CONTENT)
}
