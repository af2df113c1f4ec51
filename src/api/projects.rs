//! Project routes - `/api/projects`

use super::{
    AppState,
    error::ApiResult,
    extractors::{RowId, payload},
};
use crate::errors::Error;
use crate::models::ProjectDto;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/projects/ - Create a project
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<ProjectDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let created = state.projects.create_project(payload(body)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/projects/{id} - Replace a project
pub async fn update_project(
    State(state): State<AppState>,
    RowId(id): RowId,
    body: Result<Json<ProjectDto>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let updated = state.projects.update_project(id, payload(body)).await?;
    Ok(Json(updated))
}

/// DELETE /api/projects/{id} - `true` when deleted, `false` with 404 otherwise
pub async fn delete_project(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<(StatusCode, Json<bool>)> {
    match state.projects.delete_project(id).await {
        Ok(true) => Ok((StatusCode::OK, Json(true))),
        Ok(false) | Err(Error::NotFound { .. }) => Ok((StatusCode::NOT_FOUND, Json(false))),
        Err(e) => Err(e),
    }
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<Json<ProjectDto>> {
    Ok(Json(state.projects.get_project_by_id(id).await?))
}

/// GET /api/projects/ - List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    Ok(Json(state.projects.get_all_projects().await?))
}
