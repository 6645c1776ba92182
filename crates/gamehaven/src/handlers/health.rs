//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store check, reports the number of stored games

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Store health.
///
/// Returns 200 with the game count, or 503 when the store cannot be read.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.games.count_games().await {
        Ok(games) => {
            (StatusCode::OK, Json(json!({ "status": "ok", "games": games }))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
