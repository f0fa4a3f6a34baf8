//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use snapshare_core::types::id::{NotificationId, UserId};
use snapshare_entity::notification::GroupKey;

/// Body for bulk mark-read and delete.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationIdsRequest {
    /// Notifications to act on.
    #[validate(length(min = 1, max = 1000, message = "Between 1 and 1000 ids are required"))]
    pub ids: Vec<NotificationId>,
}

/// Body for group mark-read and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
    /// Group identity as returned by the grouped listing.
    pub key: GroupKey,
}

/// Query parameters for the WebSocket upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct WsQuery {
    /// User the connection belongs to.
    pub user_id: UserId,
}
