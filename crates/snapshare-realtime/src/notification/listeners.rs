//! Domain action listeners.
//!
//! Each action becomes one notification per recipient: resolve the sender's
//! name, format the message, write, then push. Every step is best-effort and
//! the result is a list of [`Delivery`] values that are only logged.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use snapshare_core::events::{Actor, DomainAction, DomainEvent};
use snapshare_core::traits::{EventDirectory, ProfileDirectory};
use snapshare_core::types::id::{EventId, UserId};
use snapshare_entity::notification::{NewNotification, NotificationKind};

use super::formatter::{Detail, NotificationFormatter};
use super::outcome::{BroadcastReport, Delivery};
use super::pusher::RealtimePusher;
use super::writer::NotificationWriter;

/// One recipient's notification before the message is formatted.
struct Draft<'a> {
    recipient: UserId,
    kind: NotificationKind,
    event_ref: Option<EventId>,
    detail: Detail<'a>,
}

/// Listens for domain actions and produces notifications.
#[derive(Debug)]
pub struct NotificationListeners {
    writer: NotificationWriter,
    pusher: RealtimePusher,
    profiles: Arc<dyn ProfileDirectory>,
    events: Arc<dyn EventDirectory>,
    unknown_sender: String,
}

impl NotificationListeners {
    /// Creates the listener set.
    pub fn new(
        writer: NotificationWriter,
        pusher: RealtimePusher,
        profiles: Arc<dyn ProfileDirectory>,
        events: Arc<dyn EventDirectory>,
        unknown_sender: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            pusher,
            profiles,
            events,
            unknown_sender: unknown_sender.into(),
        }
    }

    /// Handles `event` on a background task. The caller's own write has
    /// already succeeded and never waits on this.
    pub fn spawn(self: &Arc<Self>, event: DomainEvent) -> JoinHandle<()> {
        let listeners = Arc::clone(self);
        tokio::spawn(async move {
            listeners.handle(&event).await;
        })
    }

    /// Handles one domain action and returns what happened per recipient.
    pub async fn handle(&self, event: &DomainEvent) -> Vec<Delivery> {
        let action = &event.action;
        let deliveries = match action {
            DomainAction::EventFollowed {
                actor,
                event_id,
                author_id,
            } => {
                self.notify_one(actor, Draft {
                    recipient: *author_id,
                    kind: NotificationKind::EventFollow,
                    event_ref: Some(*event_id),
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::UserFollowed { actor, followed_id } => {
                self.notify_one(actor, Draft {
                    recipient: *followed_id,
                    kind: NotificationKind::NewFollower,
                    event_ref: None,
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::EventViewed {
                actor,
                event_id,
                author_id,
            } => {
                self.notify_one(actor, Draft {
                    recipient: *author_id,
                    kind: NotificationKind::ViewEvent,
                    event_ref: Some(*event_id),
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::EventLiked {
                actor,
                event_id,
                author_id,
            } => {
                self.notify_one(actor, Draft {
                    recipient: *author_id,
                    kind: NotificationKind::LikeEvent,
                    event_ref: Some(*event_id),
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::CollaborationRequested {
                actor,
                event_id,
                author_id,
            } => {
                self.notify_one(actor, Draft {
                    recipient: *author_id,
                    kind: NotificationKind::CollaborationRequested,
                    event_ref: Some(*event_id),
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::CollaborationAccepted {
                actor,
                event_id,
                requester_id,
            } => {
                self.notify_one(actor, Draft {
                    recipient: *requester_id,
                    kind: NotificationKind::CollaborationAccepted,
                    event_ref: Some(*event_id),
                    detail: Detail::None,
                })
                .await
            }
            DomainAction::MessageSent {
                actor,
                recipient_id,
                content,
                event_id,
            } => {
                if content.trim().is_empty() {
                    vec![Delivery::Skipped {
                        reason: "empty message content",
                    }]
                } else {
                    self.notify_one(actor, Draft {
                        recipient: *recipient_id,
                        kind: NotificationKind::NewMessage,
                        event_ref: *event_id,
                        detail: Detail::Message(content),
                    })
                    .await
                }
            }
            DomainAction::MediaAdded {
                actor,
                event_id,
                media_count,
            } => self.broadcast_media(actor, *event_id, *media_count).await,
        };

        for delivery in &deliveries {
            if let Delivery::Skipped { reason } = delivery {
                debug!(action_id = %event.id, action = action.name(), reason, "Notification skipped");
            }
        }
        deliveries
    }

    async fn notify_one(&self, actor: &Actor, draft: Draft<'_>) -> Vec<Delivery> {
        if actor.user_id() == Some(draft.recipient) {
            return vec![Delivery::Skipped {
                reason: "actor is the recipient",
            }];
        }

        let sender = self.resolve_sender(actor).await;
        let title = match draft.event_ref {
            Some(event_id) => self.resolve_title(event_id).await,
            None => None,
        };
        vec![self.deliver(draft, &sender, title).await]
    }

    async fn broadcast_media(&self, actor: &Actor, event_id: EventId, count: u32) -> Vec<Delivery> {
        let followers = match self.events.followers(event_id).await {
            Ok(list) => list,
            Err(e) => {
                warn!(event_id = %event_id, error = %e, "Failed to load followers for media broadcast");
                return vec![Delivery::Skipped {
                    reason: "follower lookup failed",
                }];
            }
        };

        let actor_id = actor.user_id();
        let mut seen = HashSet::new();
        let recipients: Vec<UserId> = followers
            .into_iter()
            .filter(|id| Some(*id) != actor_id)
            .filter(|id| seen.insert(*id))
            .collect();

        if recipients.is_empty() {
            return vec![Delivery::Skipped {
                reason: "no followers to notify",
            }];
        }

        let sender = self.resolve_sender(actor).await;
        let title = self.resolve_title(event_id).await;

        let deliveries = join_all(recipients.into_iter().map(|recipient| {
            self.deliver(
                Draft {
                    recipient,
                    kind: NotificationKind::MediaAdded,
                    event_ref: Some(event_id),
                    detail: Detail::MediaCount(count),
                },
                &sender,
                title.clone(),
            )
        }))
        .await;

        let report = BroadcastReport::from_deliveries(&deliveries);
        info!(
            event_id = %event_id,
            attempted = report.attempted,
            written = report.written,
            pushed = report.pushed,
            failed = report.failed,
            "Media broadcast finished"
        );
        deliveries
    }

    /// Write then push one notification. A write failure is logged and
    /// reported; nothing is pushed for it.
    async fn deliver(&self, draft: Draft<'_>, sender: &str, title: Option<String>) -> Delivery {
        let message =
            NotificationFormatter::compose(&draft.kind, sender, title.as_deref(), draft.detail);
        let new = NewNotification {
            recipient: draft.recipient,
            kind: draft.kind,
            message,
            sender_name: sender.to_string(),
            event_ref: draft.event_ref,
            event_title: title,
        };

        match self.writer.write(new).await {
            Ok(notification) => {
                let push = self.pusher.push(&notification).await;
                Delivery::Stored {
                    recipient: draft.recipient,
                    notification_id: notification.id,
                    push,
                }
            }
            Err(e) => {
                error!(recipient = %draft.recipient, error = %e, "Failed to store notification");
                Delivery::WriteFailed {
                    recipient: draft.recipient,
                    error: e.to_string(),
                }
            }
        }
    }

    async fn resolve_sender(&self, actor: &Actor) -> String {
        let name = match actor {
            Actor::User { id } => match self.profiles.display_name(*id).await {
                Ok(name) => name,
                Err(e) => {
                    warn!(user_id = %id, error = %e, "Display name lookup failed");
                    String::new()
                }
            },
            Actor::Named { name, .. } | Actor::Guest { name } => name.clone(),
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.unknown_sender.clone()
        } else {
            trimmed.to_string()
        }
    }

    async fn resolve_title(&self, event_id: EventId) -> Option<String> {
        match self.events.title(event_id).await {
            Ok(title) => title.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!(event_id = %event_id, error = %e, "Event title lookup failed");
                None
            }
        }
    }
}
