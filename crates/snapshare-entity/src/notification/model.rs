//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use snapshare_core::types::id::{EventId, NotificationId, UserId};

use super::kind::NotificationKind;

/// A persisted notification addressed to one recipient.
///
/// `read` only ever moves from `false` to `true`; `created_at` is set once
/// by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The user who should see this notification.
    #[sqlx(rename = "recipient_id")]
    pub recipient: UserId,
    /// The event the notification concerns, if any.
    #[sqlx(rename = "event_id")]
    pub event_ref: Option<EventId>,
    /// Event title copied at creation time (or backfilled later).
    pub event_title: Option<String>,
    /// Notification type.
    #[sqlx(try_from = "String")]
    pub kind: NotificationKind,
    /// Precomputed human-readable text.
    pub message: String,
    /// Display name of the actor.
    pub sender_name: String,
    /// Whether the recipient has read this notification.
    #[sqlx(rename = "is_read")]
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// Input for creating a notification. The store assigns `id`,
/// `created_at` and `read = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    /// Recipient.
    pub recipient: UserId,
    /// Notification type.
    pub kind: NotificationKind,
    /// Precomputed text.
    pub message: String,
    /// Actor display name.
    pub sender_name: String,
    /// Related event.
    pub event_ref: Option<EventId>,
    /// Related event title, when already known.
    pub event_title: Option<String>,
}

impl NewNotification {
    /// Materialize as an unread record with the given identity and time.
    pub fn into_notification(self, id: NotificationId, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id,
            recipient: self.recipient,
            event_ref: self.event_ref,
            event_title: self.event_title,
            kind: self.kind,
            message: self.message,
            sender_name: self.sender_name,
            read: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_starts_unread() {
        let recipient = UserId::new();
        let n = NewNotification {
            recipient,
            kind: NotificationKind::LikeEvent,
            message: "Ana liked your event.".into(),
            sender_name: "Ana".into(),
            event_ref: Some(EventId::new()),
            event_title: None,
        }
        .into_notification(NotificationId::new(), Utc::now());

        assert!(n.is_unread());
        assert_eq!(n.recipient, recipient);
        assert_eq!(n.kind, NotificationKind::LikeEvent);
    }
}
