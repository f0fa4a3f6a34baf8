//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use snapshare_core::config::AppConfig;
use snapshare_database::{DatabasePool, StorageBackend};
use snapshare_realtime::{
    ConnectionManager, NotificationListeners, NotificationWriter, RealtimePusher,
};
use snapshare_service::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent with the memory provider
    pub db_pool: Option<DatabasePool>,
    /// Live WebSocket connections
    pub connections: Arc<ConnectionManager>,
    /// Domain action listeners
    pub listeners: Arc<NotificationListeners>,
    /// Notification listing and bulk actions
    pub notification_service: Arc<NotificationService>,
}

impl AppState {
    /// Wires the notification pipeline over an opened storage backend.
    pub fn new(config: AppConfig, backend: &StorageBackend) -> Self {
        let connections = Arc::new(ConnectionManager::new(config.realtime.clone()));

        let listeners = Arc::new(NotificationListeners::new(
            NotificationWriter::new(Arc::clone(&backend.store)),
            RealtimePusher::new(connections.clone()),
            Arc::clone(&backend.profiles),
            Arc::clone(&backend.events),
            config.realtime.unknown_sender_name.clone(),
        ));

        let notification_service = Arc::new(NotificationService::new(Arc::clone(&backend.store)));

        Self {
            config: Arc::new(config),
            db_pool: backend.pool.clone(),
            connections,
            listeners,
            notification_service,
        }
    }
}
