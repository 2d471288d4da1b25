use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a002_health_check::aggregate::{HealthCheck, HealthCheckDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a002_health_check::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/health-checks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<HealthCheck>> {
    Json(service::list(&state.health_checks, &params.to_query::<HealthCheck>()))
}

/// GET /api/health-checks/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HealthCheck>, ApiError> {
    Ok(Json(service::get_by_id(&state.health_checks, &id)?))
}

/// POST /api/health-checks
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<HealthCheckDto>,
) -> Result<Json<HealthCheck>, ApiError> {
    Ok(Json(service::create(&state.health_checks, dto)?))
}

/// PUT /api/health-checks/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<HealthCheckDto>,
) -> Result<Json<HealthCheck>, ApiError> {
    Ok(Json(service::update(&state.health_checks, &id, dto)?))
}

/// DELETE /api/health-checks/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.health_checks, &id)?;
    Ok(())
}
