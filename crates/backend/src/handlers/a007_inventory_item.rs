use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a007_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a007_inventory_item::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/inventory
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<InventoryItem>> {
    Json(service::list(&state.inventory, &params.to_query::<InventoryItem>()))
}

/// GET /api/inventory/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(service::get_by_id(&state.inventory, &id)?))
}

/// POST /api/inventory
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<InventoryItemDto>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(service::create(&state.inventory, dto)?))
}

/// PUT /api/inventory/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<InventoryItemDto>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(service::update(&state.inventory, &id, dto)?))
}

/// DELETE /api/inventory/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.inventory, &id)?;
    Ok(())
}
