//! Request context carrying the calling user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use snapshare_core::types::id::UserId;

/// Context for the current request.
///
/// Built by the API layer (or the CLI) and passed into service methods so
/// that every operation knows whose notifications it touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The calling user.
    pub user_id: UserId,
    /// Correlation ID for logs.
    pub request_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            request_id: Uuid::new_v4(),
            request_time: Utc::now(),
        }
    }
}
