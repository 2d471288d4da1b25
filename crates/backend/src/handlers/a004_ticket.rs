use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a004_ticket::aggregate::{Ticket, TicketDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a004_ticket::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/tickets
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<Ticket>> {
    Json(service::list(&state.tickets, &params.to_query::<Ticket>()))
}

/// GET /api/tickets/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    Ok(Json(service::get_by_id(&state.tickets, &id)?))
}

/// POST /api/tickets
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<TicketDto>,
) -> Result<Json<Ticket>, ApiError> {
    Ok(Json(service::create(&state.tickets, dto)?))
}

/// PUT /api/tickets/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<TicketDto>,
) -> Result<Json<Ticket>, ApiError> {
    Ok(Json(service::update(&state.tickets, &id, dto)?))
}

/// DELETE /api/tickets/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.tickets, &id)?;
    Ok(())
}
