use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a001_animal::aggregate::{Animal, AnimalDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a001_animal::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/animals
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<Animal>> {
    Json(service::list(&state.animals, &params.to_query::<Animal>()))
}

/// GET /api/animals/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(service::get_by_id(&state.animals, &id)?))
}

/// POST /api/animals
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<AnimalDto>,
) -> Result<Json<Animal>, ApiError> {
    let today = chrono::Local::now().date_naive();
    Ok(Json(service::create(&state.animals, dto, today)?))
}

/// PUT /api/animals/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<AnimalDto>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(service::update(&state.animals, &id, dto)?))
}

/// DELETE /api/animals/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.animals, &id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_pages_and_filters() {
        let state = AppState::new(Config::default());
        let params = ListParams {
            page: Some(1),
            page_size: Some(5),
            ..Default::default()
        };
        let Json(page) = list(State(state.clone()), Query(params)).await;
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_missing_animal_is_404() {
        let state = AppState::new(Config::default());
        let err = get_by_id(State(state), Path("A9999".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_form_is_400() {
        let state = AppState::new(Config::default());
        let err = create(State(state.clone()), Json(AnimalDto::default()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.animals.len(), 7);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let state = AppState::new(Config::default());
        delete(State(state.clone()), Path("A1003".into())).await.unwrap();
        let err = get_by_id(State(state), Path("A1003".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
