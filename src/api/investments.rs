//! Investment routes - `/api/investments`

use super::{
    AppState,
    error::ApiResult,
    extractors::{RowId, payload},
};
use crate::models::InvestmentDto;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/investments/ - Record an investment
pub async fn create_investment(
    State(state): State<AppState>,
    body: Result<Json<InvestmentDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InvestmentDto>)> {
    let created = state.investments.create_investment(payload(body)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/investments/{id}
pub async fn update_investment(
    State(state): State<AppState>,
    RowId(id): RowId,
    body: Result<Json<InvestmentDto>, JsonRejection>,
) -> ApiResult<Json<InvestmentDto>> {
    let updated = state
        .investments
        .update_investment(id, payload(body))
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/investments/{id} - 204 on success, errors surface as JSON
pub async fn delete_investment(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<StatusCode> {
    state.investments.delete_investment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/investments/{id}
pub async fn get_investment(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<Json<InvestmentDto>> {
    Ok(Json(state.investments.get_investment_by_id(id).await?))
}

/// GET /api/investments/project/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    RowId(project_id): RowId,
) -> ApiResult<Json<Vec<InvestmentDto>>> {
    let investments = state
        .investments
        .get_investments_by_project_id(project_id)
        .await?;
    Ok(Json(investments))
}

/// GET /api/investments/investor/{name}
pub async fn list_by_investor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<InvestmentDto>>> {
    let investments = state
        .investments
        .get_investments_by_investor_name(&name)
        .await?;
    Ok(Json(investments))
}

/// GET /api/investments/profile - configured profile value as plain text
pub async fn profile(State(state): State<AppState>) -> String {
    state.profile.to_string()
}
