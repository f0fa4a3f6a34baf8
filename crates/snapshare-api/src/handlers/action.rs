//! Domain action intake.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use snapshare_core::events::{DomainAction, DomainEvent};

use crate::dto::response::{AcceptedResponse, ApiResponse};
use crate::state::AppState;

/// POST /api/actions
///
/// Called by the services that own follows, likes, uploads and messages
/// after their own write succeeded. Notification work runs in the
/// background; the response never reflects its outcome.
pub async fn submit_action(
    State(state): State<AppState>,
    Json(action): Json<DomainAction>,
) -> (StatusCode, Json<ApiResponse<AcceptedResponse>>) {
    let event = DomainEvent::new(action);
    let action_id = event.id;
    tracing::debug!(action_id = %action_id, action = event.action.name(), "Action accepted");

    state.listeners.spawn(event);

    (
        StatusCode::ACCEPTED,
        Json(ApiResponse::ok(AcceptedResponse { action_id })),
    )
}
