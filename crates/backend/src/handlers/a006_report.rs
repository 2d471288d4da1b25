use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a006_report::aggregate::{Report, ReportDto, ReportTemplate};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a006_report::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/reports
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<Report>> {
    Json(service::list(&state.reports, &params.to_query::<Report>()))
}

/// GET /api/reports/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(service::get_by_id(&state.reports, &id)?))
}

/// POST /api/reports
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<ReportDto>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(service::create(&state.reports, dto)?))
}

/// PUT /api/reports/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ReportDto>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(service::update(&state.reports, &id, dto)?))
}

/// DELETE /api/reports/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.reports, &id)?;
    Ok(())
}

/// POST /api/reports/:id/download
pub async fn record_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(service::record_download(&state.reports, &id)?))
}

/// GET /api/report-templates
pub async fn templates() -> Json<Vec<ReportTemplate>> {
    Json(service::templates())
}
