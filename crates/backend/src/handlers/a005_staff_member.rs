use axum::extract::{Path, Query, State};
use axum::Json;

use contracts::domain::a005_staff_member::aggregate::{StaffMember, StaffMemberDto};
use contracts::shared::list_query::ListPage;

use super::list_params::ListParams;
use crate::domain::a005_staff_member::service;
use crate::shared::error::ApiError;
use crate::state::AppState;

/// GET /api/staff
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListPage<StaffMember>> {
    Json(service::list(&state.staff, &params.to_query::<StaffMember>()))
}

/// GET /api/staff/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StaffMember>, ApiError> {
    Ok(Json(service::get_by_id(&state.staff, &id)?))
}

/// POST /api/staff
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<StaffMemberDto>,
) -> Result<Json<StaffMember>, ApiError> {
    Ok(Json(service::create(&state.staff, dto)?))
}

/// PUT /api/staff/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<StaffMemberDto>,
) -> Result<Json<StaffMember>, ApiError> {
    Ok(Json(service::update(&state.staff, &id, dto)?))
}

/// DELETE /api/staff/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<(), ApiError> {
    service::delete(&state.staff, &id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::list_params::FilterParams;
    use crate::shared::config::Config;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_department_and_numeric_id() {
        let state = AppState::new(Config::default());
        let params = ListParams {
            filters: FilterParams {
                department: Some("veterinary".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let Json(page) = list(State(state.clone()), Query(params)).await;
        assert_eq!(page.total_count, 2);

        let Json(member) = get_by_id(State(state.clone()), Path("5".into())).await.unwrap();
        assert_eq!(member.name, "Grace Muthoni");
        let err = get_by_id(State(state), Path("abc".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
