//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match &state.db_pool {
        None => "memory",
        Some(pool) => {
            if pool.ping().await {
                "connected"
            } else {
                "unavailable"
            }
        }
    }
    .to_string();
    let status = if database == "unavailable" {
        "degraded"
    } else {
        "ok"
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        ws_connections: state.connections.connection_count(),
        online_users: state.connections.user_count(),
    }))
}
