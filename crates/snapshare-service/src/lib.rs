//! # snapshare-service
//!
//! Read-side services for SnapShare notifications. The listing service
//! exposes raw and grouped views plus bulk read/delete that fan out to every
//! member of a group; the backfill sweep fills in event titles on older
//! records.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod notification;

pub use context::RequestContext;
pub use notification::{BackfillReport, NotificationService, TitleBackfill, group_notifications};
