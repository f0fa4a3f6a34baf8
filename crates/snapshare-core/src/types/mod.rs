//! Shared value types.

pub mod id;

pub use id::{EventId, NotificationId, UserId};
