use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Deserialize;

use contracts::domain::common::Record;
use contracts::shared::list_query::{run_query, Searchable, Sortable};

use super::list_params::FilterParams;
use crate::shared::data::store::Repository;
use crate::shared::error::{ApiError, ServiceError};
use crate::shared::export::{export_records, ExportFile, ExportFormat, ExportKind};
use crate::state::AppState;

/// `?format=csv&kind=summary` plus the list filters, so the file holds
/// what the table shows across all pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub kind: ExportKind,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: String,
    pub ascending: Option<bool>,
    #[serde(flatten)]
    pub filters: FilterParams,
}

fn render<T>(repo: &Repository<T>, params: &ExportParams, today: NaiveDate) -> anyhow::Result<ExportFile>
where
    T: Record + Searchable + Sortable,
{
    let query = params
        .filters
        .to_query::<T>(&params.search, &params.sort, params.ascending);
    let items = run_query(&repo.list(), &query).items;
    export_records(T::ENTITY, &items, params.format, params.kind, today)
}

/// Path segment to rendered file. Both the route name and the entity name
/// are accepted (`health-checks`, `health_checks`).
pub fn export_entity(
    state: &AppState,
    entity: &str,
    params: &ExportParams,
    today: NaiveDate,
) -> anyhow::Result<ExportFile> {
    match entity.replace('-', "_").as_str() {
        "animals" => render(&state.animals, params, today),
        "health_checks" => render(&state.health_checks, params, today),
        "conservation_projects" => render(&state.conservation_projects, params, today),
        "tickets" => render(&state.tickets, params, today),
        "staff" => render(&state.staff, params, today),
        "reports" => render(&state.reports, params, today),
        "inventory" => render(&state.inventory, params, today),
        _ => Err(ServiceError::UnknownEntity(entity.to_string()).into()),
    }
}

/// GET /api/export/:entity
pub async fn export(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let today = chrono::Local::now().date_naive();
    let file = export_entity(&state, &entity, &params, today)?;
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use axum::http::StatusCode;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    #[test]
    fn test_filtered_csv_export() {
        let state = AppState::new(Config::default());
        let params = ExportParams {
            filters: FilterParams {
                status: Some("used".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let file = export_entity(&state, "tickets", &params, day()).unwrap();
        assert_eq!(file.filename, "tickets_export_2025-04-15.csv");
        let lines: Vec<&str> = file.body.lines().collect();
        assert_eq!(
            lines[0],
            "\u{FEFF}id,type,visitor,date,time,status,amount,paymentMethod"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("T-4375,Family Package,David Johnson"));
    }

    #[test]
    fn test_summary_json_for_route_name() {
        let state = AppState::new(Config::default());
        let params = ExportParams {
            format: ExportFormat::Json,
            kind: ExportKind::Summary,
            ..Default::default()
        };
        let file = export_entity(&state, "health-checks", &params, day()).unwrap();
        assert_eq!(file.filename, "health_checks_export_2025-04-15.json");
        let rows: Vec<serde_json::Value> = serde_json::from_str(&file.body).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            serde_json::json!({ "id": "HC001", "status": "scheduled", "date": "2024-03-15" })
        );
    }

    #[test]
    fn test_inventory_export_by_category() {
        let state = AppState::new(Config::default());
        let params = ExportParams {
            kind: ExportKind::Summary,
            filters: FilterParams {
                category: Some("vaccines".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let file = export_entity(&state, "inventory", &params, day()).unwrap();
        assert_eq!(file.filename, "inventory_export_2025-04-15.csv");
        let lines: Vec<&str> = file.body.lines().collect();
        assert_eq!(lines, vec!["\u{FEFF}id,name,status", "MED004,Vaccines,low-stock"]);
    }

    #[test]
    fn test_nothing_left_after_filtering() {
        let state = AppState::new(Config::default());
        let params = ExportParams {
            search: "no such visitor".into(),
            ..Default::default()
        };
        let err = ApiError::from(export_entity(&state, "tickets", &params, day()).unwrap_err());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_collection() {
        let state = AppState::new(Config::default());
        let err = export_entity(&state, "penguins", &ExportParams::default(), day()).unwrap_err();
        assert_eq!(ApiError::from(err).status(), StatusCode::NOT_FOUND);
    }
}
