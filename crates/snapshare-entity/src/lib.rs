//! # snapshare-entity
//!
//! Entity models for SnapShare notifications. [`notification::Notification`]
//! is a database row and derives `sqlx::FromRow`; the grouping types are
//! derived display values and are never persisted.

pub mod notification;
