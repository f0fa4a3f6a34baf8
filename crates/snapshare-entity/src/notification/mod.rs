//! Notification domain entities.

pub mod group;
pub mod kind;
pub mod model;

pub use group::{GroupKey, NotificationGroup};
pub use kind::NotificationKind;
pub use model::{NewNotification, Notification};
