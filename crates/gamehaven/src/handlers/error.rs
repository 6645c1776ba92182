use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use gamehaven_core::catalog::{QueryParamsError, SchemaError};
use gamehaven_core::storage::RepositoryError;

/// Handler error. Wraps any error and maps the known ones to a status code
/// and JSON body; everything else becomes a 500.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(schema_error) = self.0.downcast_ref::<SchemaError>() {
            tracing::warn!(
                field = %schema_error.field,
                message = %schema_error.message,
                "Rejected game"
            );
            return (StatusCode::BAD_REQUEST, Json(schema_error)).into_response();
        }

        if let Some(query_error) = self.0.downcast_ref::<QueryParamsError>() {
            tracing::warn!(error = %query_error, "Rejected list query");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid query parameters" })),
            )
                .into_response();
        }

        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            if let RepositoryError::NotFound { entity_type, .. } = repo_error {
                let status = StatusCode::from_u16(repo_error.status_code())
                    .unwrap_or(StatusCode::NOT_FOUND);
                return (
                    status,
                    Json(json!({ "message": format!("{entity_type} not found") })),
                )
                    .into_response();
            }
        }

        tracing::error!(error = %self.0, "Unhandled error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
