//! Repository implementations for notifications and directory lookups.

pub mod directory;
pub mod memory;
pub mod notification;

use async_trait::async_trait;

use snapshare_core::result::AppResult;
use snapshare_core::types::id::{EventId, NotificationId, UserId};
use snapshare_entity::notification::{NewNotification, Notification};

pub use directory::{MemoryDirectory, PgDirectory};
pub use memory::MemoryNotificationStore;
pub use notification::NotificationRepository;

/// Persistence for notification records.
///
/// Each record is written, updated and deleted as a whole; no operation
/// spans more than one statement, so implementations need no extra locking.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug {
    /// Persist a new unread record and return it with its assigned ID and
    /// creation time.
    async fn insert(&self, new: NewNotification) -> AppResult<Notification>;

    /// All records for a recipient, newest first.
    async fn list_for_recipient(&self, recipient: UserId) -> AppResult<Vec<Notification>>;

    /// Mark the recipient's unread records among `ids` as read. Returns how
    /// many changed; already-read records are skipped.
    async fn mark_read(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64>;

    /// Delete the recipient's records among `ids`. Returns how many were removed.
    async fn delete(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64>;

    /// Number of unread records for a recipient.
    async fn count_unread(&self, recipient: UserId) -> AppResult<u64>;

    /// Distinct events referenced by records that still lack a title, in
    /// ascending ID order, starting strictly after `after` when given.
    async fn find_untitled_event_ids(
        &self,
        after: Option<EventId>,
        limit: u32,
    ) -> AppResult<Vec<EventId>>;

    /// Set `event_title` on every record of `event_id` whose title is unset.
    /// Records that already have a title are left alone.
    async fn set_event_title(&self, event_id: EventId, title: &str) -> AppResult<u64>;
}
