//! Profile and event lookups.

use async_trait::async_trait;
use dashmap::DashMap;
use sqlx::PgPool;

use snapshare_core::error::{AppError, ErrorKind};
use snapshare_core::result::AppResult;
use snapshare_core::traits::{EventDirectory, ProfileDirectory};
use snapshare_core::types::id::{EventId, UserId};

/// Reads the `users`, `events` and `event_followers` tables.
#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    /// Creates a directory over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDirectory for PgDirectory {
    async fn display_name(&self, user_id: UserId) -> AppResult<String> {
        sqlx::query_scalar::<_, String>("SELECT display_name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up user", e))?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}

#[async_trait]
impl EventDirectory for PgDirectory {
    async fn followers(&self, event_id: EventId) -> AppResult<Vec<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM event_followers WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load event followers", e)
            })
    }

    async fn title(&self, event_id: EventId) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>("SELECT title FROM events WHERE id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up event", e))?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))
    }
}

/// In-memory directory for the memory provider and tests.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    names: DashMap<UserId, String>,
    titles: DashMap<EventId, Option<String>>,
    followers: DashMap<EventId, Vec<UserId>>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user's display name.
    pub fn add_user(&self, user_id: UserId, name: impl Into<String>) {
        self.names.insert(user_id, name.into());
    }

    /// Registers an event and its title.
    pub fn add_event(&self, event_id: EventId, title: Option<&str>) {
        self.titles.insert(event_id, title.map(str::to_string));
        self.followers.entry(event_id).or_default();
    }

    /// Changes an event's title.
    pub fn rename_event(&self, event_id: EventId, title: &str) {
        self.titles.insert(event_id, Some(title.to_string()));
    }

    /// Adds a follower to an event.
    pub fn add_follower(&self, event_id: EventId, user_id: UserId) {
        let mut list = self.followers.entry(event_id).or_default();
        if !list.contains(&user_id) {
            list.push(user_id);
        }
    }
}

#[async_trait]
impl ProfileDirectory for MemoryDirectory {
    async fn display_name(&self, user_id: UserId) -> AppResult<String> {
        self.names
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}

#[async_trait]
impl EventDirectory for MemoryDirectory {
    async fn followers(&self, event_id: EventId) -> AppResult<Vec<UserId>> {
        self.followers
            .get(&event_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))
    }

    async fn title(&self, event_id: EventId) -> AppResult<Option<String>> {
        self.titles
            .get(&event_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))
    }
}
