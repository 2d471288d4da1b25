use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a003_conservation_project::aggregate::{ConservationProject, ConservationProjectDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a003_conservation_project::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/conservation-projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<ConservationProject>> {
    Json(service::list(&state.conservation_projects, &params.to_query::<ConservationProject>()))
}

/// GET /api/conservation-projects/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConservationProject>, ApiError> {
    Ok(Json(service::get_by_id(&state.conservation_projects, &id)?))
}

/// POST /api/conservation-projects
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<ConservationProjectDto>,
) -> Result<Json<ConservationProject>, ApiError> {
    Ok(Json(service::create(&state.conservation_projects, dto)?))
}

/// PUT /api/conservation-projects/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ConservationProjectDto>,
) -> Result<Json<ConservationProject>, ApiError> {
    Ok(Json(service::update(&state.conservation_projects, &id, dto)?))
}

/// DELETE /api/conservation-projects/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.conservation_projects, &id)?;
    Ok(())
}
