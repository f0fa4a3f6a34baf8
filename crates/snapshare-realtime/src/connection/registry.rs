//! Recipient → live connection lookup.

use std::sync::Arc;

use snapshare_core::types::id::UserId;

use super::handle::ConnectionHandle;

/// Answers "is this user connected, and over which channels".
///
/// Implemented by [`super::ConnectionManager`]; tests supply their own.
pub trait ConnectionRegistry: Send + Sync + std::fmt::Debug {
    /// Live connections for `user_id`; empty when offline.
    fn lookup(&self, user_id: UserId) -> Vec<Arc<ConnectionHandle>>;
}
