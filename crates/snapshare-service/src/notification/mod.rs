//! Notification listing, grouping, and maintenance.

pub mod backfill;
pub mod grouping;
pub mod service;

pub use backfill::{BackfillReport, TitleBackfill};
pub use grouping::{group_key, group_notifications};
pub use service::NotificationService;
