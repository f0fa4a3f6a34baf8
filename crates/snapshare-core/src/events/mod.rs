//! Domain actions that trigger notifications.
//!
//! Actions are produced by the (external) event, follow, collaboration and
//! messaging endpoints and consumed by the notification listeners.

pub mod action;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use action::{Actor, DomainAction};

/// Wrapper for a domain action with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID, used to correlate log lines.
    pub id: Uuid,
    /// When the action occurred.
    pub timestamp: DateTime<Utc>,
    /// The action payload.
    pub action: DomainAction,
}

impl DomainEvent {
    /// Wrap an action that happened just now.
    pub fn new(action: DomainAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
        }
    }
}
