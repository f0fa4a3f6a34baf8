//! # snapshare-realtime
//!
//! Turns domain actions into notifications and pushes them to live
//! connections. Provides:
//!
//! - Per-action listeners that compose messages and fan out media uploads
//! - The notification writer (persist) and pusher (best-effort delivery)
//! - The connection registry the WebSocket layer registers sockets with

pub mod connection;
pub mod message;
pub mod notification;

pub use connection::manager::ConnectionManager;
pub use connection::registry::ConnectionRegistry;
pub use notification::listeners::NotificationListeners;
pub use notification::pusher::RealtimePusher;
pub use notification::writer::NotificationWriter;
