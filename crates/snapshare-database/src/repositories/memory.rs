//! In-process notification store backed by a `DashMap`.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use snapshare_core::result::AppResult;
use snapshare_core::types::id::{EventId, NotificationId, UserId};
use snapshare_entity::notification::{NewNotification, Notification};

use super::NotificationStore;

/// Notification store that lives in process memory.
///
/// Used for `database.provider = "memory"` and throughout the tests.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    /// Notification ID → (insertion sequence, record).
    records: DashMap<NotificationId, (u64, Notification)>,
    /// Insertion counter; breaks ties between equal timestamps.
    seq: AtomicU64,
}

impl MemoryNotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fully formed record as-is, keeping its ID and timestamp.
    pub fn seed(&self, notification: Notification) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.records.insert(notification.id, (seq, notification));
    }

    /// Returns a record by ID regardless of recipient.
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.records.get(&id).map(|entry| entry.value().1.clone())
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted(&self, mut filter: impl FnMut(&Notification) -> bool) -> Vec<Notification> {
        let mut rows: Vec<(u64, Notification)> = self
            .records
            .iter()
            .filter(|entry| filter(&entry.value().1))
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });
        rows.into_iter().map(|(_, n)| n).collect()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, new: NewNotification) -> AppResult<Notification> {
        let notification = new.into_notification(NotificationId::new(), Utc::now());
        self.seed(notification.clone());
        Ok(notification)
    }

    async fn list_for_recipient(&self, recipient: UserId) -> AppResult<Vec<Notification>> {
        Ok(self.sorted(|n| n.recipient == recipient))
    }

    async fn mark_read(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64> {
        let mut changed = 0;
        for id in ids {
            if let Some(mut entry) = self.records.get_mut(id) {
                let record = &mut entry.value_mut().1;
                if record.recipient == recipient && !record.read {
                    record.read = true;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }

    async fn delete(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64> {
        let mut removed = 0;
        for id in ids {
            if self
                .records
                .remove_if(id, |_, (_, record)| record.recipient == recipient)
                .is_some()
            {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn count_unread(&self, recipient: UserId) -> AppResult<u64> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.value().1.recipient == recipient && !entry.value().1.read)
            .count() as u64)
    }

    async fn find_untitled_event_ids(
        &self,
        after: Option<EventId>,
        limit: u32,
    ) -> AppResult<Vec<EventId>> {
        let events: BTreeSet<EventId> = self
            .records
            .iter()
            .filter(|entry| entry.value().1.event_title.is_none())
            .filter_map(|entry| entry.value().1.event_ref)
            .filter(|event| after.is_none_or(|cursor| *event > cursor))
            .collect();
        Ok(events.into_iter().take(limit as usize).collect())
    }

    async fn set_event_title(&self, event_id: EventId, title: &str) -> AppResult<u64> {
        let mut changed = 0;
        for mut entry in self.records.iter_mut() {
            let record = &mut entry.value_mut().1;
            if record.event_ref == Some(event_id) && record.event_title.is_none() {
                record.event_title = Some(title.to_string());
                changed += 1;
            }
        }
        Ok(changed)
    }
}
