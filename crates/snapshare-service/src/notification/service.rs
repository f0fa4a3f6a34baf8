//! Notification listing and bulk read/delete.

use std::sync::Arc;

use tracing::info;

use snapshare_core::error::AppError;
use snapshare_core::types::id::NotificationId;
use snapshare_database::repositories::NotificationStore;
use snapshare_entity::notification::{GroupKey, Notification, NotificationGroup};

use crate::context::RequestContext;

use super::grouping::group_notifications;

/// Read-side operations over a user's notifications.
///
/// Group operations resolve the key against a fresh grouping pass and fan
/// out to every member, so a singleton and a merged entry behave the same.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification store.
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Lists the caller's notifications, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Notification>, AppError> {
        self.store.list_for_recipient(ctx.user_id).await
    }

    /// Lists the caller's notifications as grouped display entries.
    pub async fn list_grouped(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<NotificationGroup>, AppError> {
        let notifications = self.list(ctx).await?;
        Ok(group_notifications(&notifications))
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.store.count_unread(ctx.user_id).await
    }

    /// Marks the given notifications as read. IDs that are unknown, belong
    /// to someone else, or are already read are skipped.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        ids: &[NotificationId],
    ) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let updated = self.store.mark_read(ctx.user_id, ids).await?;
        info!(user_id = %ctx.user_id, requested = ids.len(), updated, "Notifications marked read");
        Ok(updated)
    }

    /// Marks every member of a group as read.
    pub async fn mark_group_read(
        &self,
        ctx: &RequestContext,
        key: &GroupKey,
    ) -> Result<u64, AppError> {
        let group = self.find_group(ctx, key).await?;
        self.mark_read(ctx, &group.member_ids).await
    }

    /// Deletes the given notifications.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        ids: &[NotificationId],
    ) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let deleted = self.store.delete(ctx.user_id, ids).await?;
        info!(user_id = %ctx.user_id, requested = ids.len(), deleted, "Notifications deleted");
        Ok(deleted)
    }

    /// Deletes every member of a group.
    pub async fn delete_group(
        &self,
        ctx: &RequestContext,
        key: &GroupKey,
    ) -> Result<u64, AppError> {
        let group = self.find_group(ctx, key).await?;
        self.delete(ctx, &group.member_ids).await
    }

    async fn find_group(
        &self,
        ctx: &RequestContext,
        key: &GroupKey,
    ) -> Result<NotificationGroup, AppError> {
        self.list_grouped(ctx)
            .await?
            .into_iter()
            .find(|g| &g.key == key)
            .ok_or_else(|| AppError::not_found("Notification group not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use snapshare_core::error::ErrorKind;
    use snapshare_core::types::id::{EventId, UserId};
    use snapshare_database::repositories::MemoryNotificationStore;
    use snapshare_entity::notification::{NewNotification, NotificationKind};

    fn seed_likes(store: &MemoryNotificationStore, recipient: UserId, event: EventId, n: i64) {
        for i in 0..n {
            store.seed(
                NewNotification {
                    recipient,
                    kind: NotificationKind::LikeEvent,
                    message: format!("Fan {i} liked your event."),
                    sender_name: format!("Fan {i}"),
                    event_ref: Some(event),
                    event_title: Some("Beach Day".into()),
                }
                .into_notification(NotificationId::new(), Utc::now() - Duration::minutes(i)),
            );
        }
    }

    #[tokio::test]
    async fn test_group_read_fans_out_to_members() {
        let store = Arc::new(MemoryNotificationStore::new());
        let user = UserId::new();
        let event = EventId::new();
        seed_likes(&store, user, event, 3);
        let svc = NotificationService::new(store.clone());
        let ctx = RequestContext::new(user);

        let first = svc.list(&ctx).await.unwrap();
        svc.mark_read(&ctx, &[first[0].id]).await.unwrap();

        let key = GroupKey::Event {
            event_id: event,
            kind: NotificationKind::LikeEvent,
        };
        assert_eq!(svc.mark_group_read(&ctx, &key).await.unwrap(), 2);

        let groups = svc.list_grouped(&ctx).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].read);
        assert_eq!(svc.unread_count(&ctx).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_group_delete_removes_members() {
        let store = Arc::new(MemoryNotificationStore::new());
        let user = UserId::new();
        let (keep, gone) = (EventId::new(), EventId::new());
        seed_likes(&store, user, keep, 1);
        seed_likes(&store, user, gone, 3);
        let svc = NotificationService::new(store.clone());
        let ctx = RequestContext::new(user);

        let key = GroupKey::Event {
            event_id: gone,
            kind: NotificationKind::LikeEvent,
        };
        assert_eq!(svc.delete_group(&ctx, &key).await.unwrap(), 3);

        let remaining = svc.list(&ctx).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].event_ref, Some(keep));
    }

    #[tokio::test]
    async fn test_other_users_group_is_not_found() {
        let store = Arc::new(MemoryNotificationStore::new());
        let owner = UserId::new();
        let event = EventId::new();
        seed_likes(&store, owner, event, 2);
        let svc = NotificationService::new(store.clone());

        let key = GroupKey::Event {
            event_id: event,
            kind: NotificationKind::LikeEvent,
        };
        let err = svc
            .delete_group(&RequestContext::new(UserId::new()), &key)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_singleton_group_behaves_like_single_record() {
        let store = Arc::new(MemoryNotificationStore::new());
        let user = UserId::new();
        store.seed(
            NewNotification {
                recipient: user,
                kind: NotificationKind::NewFollower,
                message: "Uma started following you.".into(),
                sender_name: "Uma".into(),
                event_ref: None,
                event_title: None,
            }
            .into_notification(NotificationId::new(), Utc::now()),
        );
        let svc = NotificationService::new(store.clone());
        let ctx = RequestContext::new(user);

        let groups = svc.list_grouped(&ctx).await.unwrap();
        assert!(groups[0].is_singleton());
        assert_eq!(svc.mark_group_read(&ctx, &groups[0].key).await.unwrap(), 1);
        assert_eq!(svc.delete_group(&ctx, &groups[0].key).await.unwrap(), 1);
        assert!(store.is_empty());
    }
}
