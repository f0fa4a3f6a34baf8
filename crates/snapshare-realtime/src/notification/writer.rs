//! Notification writer. The only producer of notification records.

use std::sync::Arc;

use tracing::debug;

use snapshare_core::result::AppResult;
use snapshare_database::repositories::NotificationStore;
use snapshare_entity::notification::{NewNotification, Notification};

/// Persists new notifications.
#[derive(Debug, Clone)]
pub struct NotificationWriter {
    store: Arc<dyn NotificationStore>,
}

impl NotificationWriter {
    /// Creates a writer over the given store.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Persists `new` as an unread record and returns it, ID included, so
    /// the caller can push it right away.
    pub async fn write(&self, new: NewNotification) -> AppResult<Notification> {
        let notification = self.store.insert(new).await?;
        debug!(
            notification_id = %notification.id,
            recipient = %notification.recipient,
            kind = %notification.kind,
            "Notification stored"
        );
        Ok(notification)
    }
}
