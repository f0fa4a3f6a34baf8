//! Lookups into the profile and event services.
//!
//! The notification pipeline never writes users or events; it only needs
//! display names, event titles and follower lists.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::{EventId, UserId};

/// Resolves display names for actors.
#[async_trait]
pub trait ProfileDirectory: Send + Sync + std::fmt::Debug {
    /// Returns the user's display name.
    ///
    /// An unknown user is an error; callers substitute a placeholder.
    async fn display_name(&self, user_id: UserId) -> AppResult<String>;
}

/// Resolves event metadata.
#[async_trait]
pub trait EventDirectory: Send + Sync + std::fmt::Debug {
    /// Returns the IDs of every user following the event.
    async fn followers(&self, event_id: EventId) -> AppResult<Vec<UserId>>;

    /// Returns the event's current title, `None` if the event has none.
    async fn title(&self, event_id: EventId) -> AppResult<Option<String>>;
}
