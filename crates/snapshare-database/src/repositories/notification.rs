//! PostgreSQL notification repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use snapshare_core::error::{AppError, ErrorKind};
use snapshare_core::result::AppResult;
use snapshare_core::types::id::{EventId, NotificationId, UserId};
use snapshare_entity::notification::{NewNotification, Notification};

use super::NotificationStore;

/// Repository for notification rows.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn uuids(ids: &[NotificationId]) -> Vec<Uuid> {
    ids.iter().map(|id| id.into_uuid()).collect()
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn insert(&self, new: NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, recipient_id, event_id, event_title, kind, message, sender_name, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, NOW()) RETURNING *",
        )
        .bind(NotificationId::new())
        .bind(new.recipient)
        .bind(new.event_ref)
        .bind(&new.event_title)
        .bind(new.kind.as_str())
        .bind(&new.message)
        .bind(&new.sender_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    async fn list_for_recipient(&self, recipient: UserId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE recipient_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(recipient)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    async fn mark_read(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE \
             WHERE recipient_id = $1 AND id = ANY($2) AND is_read = FALSE",
        )
        .bind(recipient)
        .bind(uuids(ids))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, recipient: UserId, ids: &[NotificationId]) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM notifications WHERE recipient_id = $1 AND id = ANY($2)")
                .bind(recipient)
                .bind(uuids(ids))
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete notifications", e)
                })?;
        Ok(result.rows_affected())
    }

    async fn count_unread(&self, recipient: UserId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(recipient)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))?;
        Ok(count.max(0) as u64)
    }

    async fn find_untitled_event_ids(
        &self,
        after: Option<EventId>,
        limit: u32,
    ) -> AppResult<Vec<EventId>> {
        sqlx::query_scalar::<_, EventId>(
            "SELECT DISTINCT event_id FROM notifications \
             WHERE event_id IS NOT NULL AND event_title IS NULL \
               AND ($1::uuid IS NULL OR event_id > $1) \
             ORDER BY event_id \
             LIMIT $2",
        )
        .bind(after)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find untitled notifications", e)
        })
    }

    async fn set_event_title(&self, event_id: EventId, title: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET event_title = $2 \
             WHERE event_id = $1 AND event_title IS NULL",
        )
        .bind(event_id)
        .bind(title)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to backfill titles", e))?;
        Ok(result.rows_affected())
    }
}
