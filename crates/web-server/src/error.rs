use analytics::AnalyticsError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Analytics(#[from] AnalyticsError),

    /// A query string the extractor could not decode, e.g. `limit=-1`.
    #[error("{0}")]
    Query(#[from] QueryRejection),

    #[error("{0}")]
    Body(#[from] JsonRejection),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Analytics(err @ AnalyticsError::Validation { .. }) => {
                tracing::warn!(error = %err, "Rejected request.");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Analytics(err @ AnalyticsError::NotFound(_)) => {
                tracing::info!(error = %err, "Sector not found.");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Query(rejection) => {
                tracing::warn!(error = %rejection, "Malformed query string.");
                (rejection.status(), rejection.body_text())
            }
            AppError::Body(rejection) => {
                tracing::warn!(error = %rejection, "Malformed request body.");
                (rejection.status(), rejection.body_text())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
