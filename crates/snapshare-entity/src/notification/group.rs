//! Grouped display entries derived from raw notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use snapshare_core::types::id::{EventId, NotificationId};

use super::kind::NotificationKind;

/// Identity of a display entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum GroupKey {
    /// All notifications of one recognized kind about one event.
    Event {
        /// Event reference.
        event_id: EventId,
        /// Notification kind.
        kind: NotificationKind,
    },
    /// A notification that never merges with anything else.
    Single {
        /// The notification's own ID.
        id: NotificationId,
    },
}

/// One rendered entry: a single notification or several merged ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationGroup {
    /// Group identity, used for bulk read/delete.
    pub key: GroupKey,
    /// Kind shared by all members.
    pub kind: NotificationKind,
    /// Event shared by all members.
    pub event_ref: Option<EventId>,
    /// Sender of the first member encountered.
    pub sender_name: String,
    /// Title from the most recent member that carried one.
    pub event_title: Option<String>,
    /// Display text.
    pub message: String,
    /// Number of members.
    pub count: usize,
    /// Newest member's creation time.
    pub latest_at: DateTime<Utc>,
    /// True when every member is read.
    pub read: bool,
    /// Member IDs in input order.
    pub member_ids: Vec<NotificationId>,
}

impl NotificationGroup {
    /// Whether this entry stands for exactly one notification.
    pub fn is_singleton(&self) -> bool {
        self.count == 1
    }
}
