use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use contracts::shared::validation::{FieldError, ValidationErrorResponse};

/// Failures a service reports on purpose. Anything else travelling in an
/// `anyhow::Error` is treated as an internal error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("validation failed ({} field(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("No data available to export")]
    EmptyExport,

    #[error("unknown collection '{0}'")]
    UnknownEntity(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } | ServiceError::UnknownEntity(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::EmptyExport => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Handler error: wraps the service's `anyhow::Error` and picks the status
/// code from a [`ServiceError`] inside it, if there is one.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.0
            .downcast_ref::<ServiceError>()
            .map(ServiceError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn service_error(&self) -> Option<&ServiceError> {
        self.0.downcast_ref::<ServiceError>()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.service_error() {
            Some(ServiceError::Validation(errors)) => {
                tracing::warn!("Rejected form: {}", self.0);
                let body = ValidationErrorResponse {
                    errors: errors.clone(),
                };
                (status, Json(body)).into_response()
            }
            Some(err) => {
                tracing::warn!("{}", err);
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
            None => {
                tracing::error!("Request failed: {:#}", self.0);
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from(ServiceError::not_found("animals", "A9"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(ServiceError::Validation(vec![]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(ServiceError::EmptyExport);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_context_keeps_service_error_visible() {
        let err: anyhow::Error = anyhow::Error::from(ServiceError::EmptyExport).context("exporting tickets");
        assert_eq!(ApiError::from(err).status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_empty_export_message() {
        assert_eq!(ServiceError::EmptyExport.to_string(), "No data available to export");
    }
}
