//! Best-effort, at-most-once delivery of stored notifications to live sockets.

use std::sync::Arc;

use tracing::{debug, error};

use snapshare_entity::notification::Notification;

use crate::connection::handle::SendResult;
use crate::connection::registry::ConnectionRegistry;
use crate::message::types::OutboundMessage;

use super::outcome::PushOutcome;

/// Pushes stored notifications to the recipient's live connections.
///
/// An offline recipient is a no-op: nothing is queued or retried, the
/// stored record is the only trace.
#[derive(Debug, Clone)]
pub struct RealtimePusher {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RealtimePusher {
    /// Creates a pusher over a connection registry.
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Delivers `notification` to its recipient if connected.
    pub async fn push(&self, notification: &Notification) -> PushOutcome {
        let connections = self.registry.lookup(notification.recipient);
        if connections.is_empty() {
            debug!(recipient = %notification.recipient, "Recipient offline, push skipped");
            return PushOutcome::Offline;
        }

        let message = OutboundMessage::Notification {
            notification: notification.clone(),
        };
        let frame = match message.to_frame() {
            Ok(f) => f,
            Err(e) => {
                error!(error = %e, notification_id = %notification.id, "Failed to serialize push");
                return PushOutcome::Dropped;
            }
        };

        let delivered = connections
            .iter()
            .filter(|conn| conn.send(frame.clone()) == SendResult::Sent)
            .count();

        if delivered == 0 {
            PushOutcome::Dropped
        } else {
            PushOutcome::Delivered(delivered)
        }
    }
}
