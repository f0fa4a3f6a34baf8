//! Notification handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use snapshare_core::error::AppError;
use snapshare_entity::notification::{Notification, NotificationGroup};

use crate::dto::request::{GroupRequest, NotificationIdsRequest};
use crate::dto::response::{AffectedResponse, ApiResponse, CountResponse};
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let list = state.notification_service.list(&caller).await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// GET /api/notifications/grouped
pub async fn list_grouped(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<Vec<NotificationGroup>>>, ApiError> {
    let groups = state.notification_service.list_grouped(&caller).await?;
    Ok(Json(ApiResponse::ok(groups)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&caller).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// POST /api/notifications/read
pub async fn mark_read(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<NotificationIdsRequest>,
) -> Result<Json<ApiResponse<AffectedResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let affected = state.notification_service.mark_read(&caller, &req.ids).await?;
    Ok(Json(ApiResponse::ok(AffectedResponse { affected })))
}

/// POST /api/notifications/groups/read
pub async fn mark_group_read(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<GroupRequest>,
) -> Result<Json<ApiResponse<AffectedResponse>>, ApiError> {
    let affected = state
        .notification_service
        .mark_group_read(&caller, &req.key)
        .await?;
    Ok(Json(ApiResponse::ok(AffectedResponse { affected })))
}

/// DELETE /api/notifications
pub async fn delete_notifications(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<NotificationIdsRequest>,
) -> Result<Json<ApiResponse<AffectedResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let affected = state.notification_service.delete(&caller, &req.ids).await?;
    Ok(Json(ApiResponse::ok(AffectedResponse { affected })))
}

/// POST /api/notifications/groups/delete
pub async fn delete_group(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<GroupRequest>,
) -> Result<Json<ApiResponse<AffectedResponse>>, ApiError> {
    let affected = state
        .notification_service
        .delete_group(&caller, &req.key)
        .await?;
    Ok(Json(ApiResponse::ok(AffectedResponse { affected })))
}
