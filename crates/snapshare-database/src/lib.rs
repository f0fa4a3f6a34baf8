//! # snapshare-database
//!
//! Notification persistence for SnapShare. Provides the [`NotificationStore`]
//! trait with a PostgreSQL and an in-memory implementation, read-only
//! directory lookups for profiles and events, and connection management.

pub mod backend;
pub mod connection;
pub mod migration;
pub mod repositories;

pub use backend::StorageBackend;
pub use connection::DatabasePool;
pub use repositories::NotificationStore;
