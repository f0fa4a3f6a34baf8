//! Notification-triggering actions.

use serde::{Deserialize, Serialize};

use crate::types::id::{EventId, UserId};

/// Whoever performed an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// A registered user; the display name is looked up.
    User {
        /// User ID.
        id: UserId,
    },
    /// A user whose display name the caller already knows.
    Named {
        /// User ID, when the actor is registered.
        id: Option<UserId>,
        /// Display name.
        name: String,
    },
    /// A guest without an account.
    Guest {
        /// Name the guest entered.
        name: String,
    },
}

impl Actor {
    /// Returns the actor's user ID, if registered.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User { id } => Some(*id),
            Self::Named { id, .. } => *id,
            Self::Guest { .. } => None,
        }
    }
}

/// Actions that produce notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DomainAction {
    /// Someone followed an event.
    EventFollowed {
        /// Follower.
        actor: Actor,
        /// Followed event.
        event_id: EventId,
        /// Event author (recipient).
        author_id: UserId,
    },
    /// Someone followed a user.
    UserFollowed {
        /// Follower.
        actor: Actor,
        /// Followed user (recipient).
        followed_id: UserId,
    },
    /// Someone viewed an event.
    EventViewed {
        /// Viewer.
        actor: Actor,
        /// Viewed event.
        event_id: EventId,
        /// Event author (recipient).
        author_id: UserId,
    },
    /// Someone liked an event.
    EventLiked {
        /// Liker.
        actor: Actor,
        /// Liked event.
        event_id: EventId,
        /// Event author (recipient).
        author_id: UserId,
    },
    /// Someone asked to collaborate on an event.
    CollaborationRequested {
        /// Requester.
        actor: Actor,
        /// Target event.
        event_id: EventId,
        /// Event author (recipient).
        author_id: UserId,
    },
    /// An event author accepted a collaboration request.
    CollaborationAccepted {
        /// Author who accepted.
        actor: Actor,
        /// Event.
        event_id: EventId,
        /// Original requester (recipient).
        requester_id: UserId,
    },
    /// Media was uploaded to an event. Fans out to every follower.
    MediaAdded {
        /// Uploader.
        actor: Actor,
        /// Event that received media.
        event_id: EventId,
        /// Number of items uploaded in this batch.
        #[serde(default = "default_media_count")]
        media_count: u32,
    },
    /// A direct message was sent.
    MessageSent {
        /// Sender.
        actor: Actor,
        /// Recipient.
        recipient_id: UserId,
        /// Message body.
        content: String,
        /// Event the conversation concerns, if any.
        #[serde(default)]
        event_id: Option<EventId>,
    },
}

impl DomainAction {
    /// Short action name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EventFollowed { .. } => "event_followed",
            Self::UserFollowed { .. } => "user_followed",
            Self::EventViewed { .. } => "event_viewed",
            Self::EventLiked { .. } => "event_liked",
            Self::CollaborationRequested { .. } => "collaboration_requested",
            Self::CollaborationAccepted { .. } => "collaboration_accepted",
            Self::MediaAdded { .. } => "media_added",
            Self::MessageSent { .. } => "message_sent",
        }
    }
}

fn default_media_count() -> u32 {
    1
}
