//! Connection lifecycle and inbound frame handling.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use snapshare_core::config::RealtimeConfig;
use snapshare_core::types::id::UserId;

use crate::message::types::{InboundMessage, OutboundMessage};

use super::handle::{ConnectionHandle, ConnectionId};
use super::pool::ConnectionPool;
use super::registry::ConnectionRegistry;

/// Manages all active WebSocket connections.
///
/// Written by the WebSocket layer on connect/disconnect and read by the
/// notification pusher through [`ConnectionRegistry`].
#[derive(Debug)]
pub struct ConnectionManager {
    /// Connection pool.
    pool: ConnectionPool,
    /// Configuration.
    config: RealtimeConfig,
}

impl ConnectionManager {
    /// Creates a new connection manager.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            pool: ConnectionPool::new(),
            config,
        }
    }

    /// Registers a new connection for `user_id`.
    ///
    /// Returns the connection handle and a receiver for outbound frames.
    pub fn register(&self, user_id: UserId) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size.max(1));
        let handle = Arc::new(ConnectionHandle::new(user_id, tx));

        let existing = self.pool.get_user_connections(&user_id);
        if existing.len() >= self.config.max_connections_per_user {
            warn!(
                user_id = %user_id,
                count = existing.len(),
                max = self.config.max_connections_per_user,
                "User at max connections, oldest will be replaced"
            );
            if let Some(oldest) = existing.first() {
                oldest.mark_closed();
                self.pool.remove(&oldest.id);
            }
        }

        self.pool.add(handle.clone());

        info!(
            conn_id = %handle.id,
            user_id = %user_id,
            "WebSocket connection registered"
        );

        (handle, rx)
    }

    /// Unregisters a connection.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.pool.remove(conn_id) {
            handle.mark_closed();
            info!(
                conn_id = %conn_id,
                user_id = %handle.user_id,
                "WebSocket connection unregistered"
            );
        }
    }

    /// Processes an inbound text frame from a client.
    pub fn handle_inbound(&self, conn_id: &ConnectionId, raw_message: &str) {
        let Some(handle) = self.pool.get(conn_id) else {
            warn!(conn_id = %conn_id, "Message from unknown connection");
            return;
        };

        let reply = match serde_json::from_str::<InboundMessage>(raw_message) {
            Ok(InboundMessage::Ping { timestamp }) => OutboundMessage::Pong { timestamp },
            Err(e) => OutboundMessage::Error {
                code: "INVALID_MESSAGE".to_string(),
                message: format!("Failed to parse message: {e}"),
            },
        };

        match reply.to_frame() {
            Ok(frame) => {
                handle.send(frame);
            }
            Err(e) => error!(error = %e, "Failed to serialize reply"),
        }
    }

    /// Closes all connections.
    pub fn close_all(&self) {
        let all = self.pool.all_connections();
        for conn in &all {
            conn.mark_closed();
            self.pool.remove(&conn.id);
        }
        info!(count = all.len(), "All connections closed");
    }

    /// Returns the total connection count.
    pub fn connection_count(&self) -> usize {
        self.pool.connection_count()
    }

    /// Returns the number of unique connected users.
    pub fn user_count(&self) -> usize {
        self.pool.user_count()
    }
}

impl ConnectionRegistry for ConnectionManager {
    fn lookup(&self, user_id: UserId) -> Vec<Arc<ConnectionHandle>> {
        let connections = self.pool.get_user_connections(&user_id);
        debug!(user_id = %user_id, count = connections.len(), "Connection lookup");
        connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(max_per_user: usize) -> ConnectionManager {
        ConnectionManager::new(RealtimeConfig {
            max_connections_per_user: max_per_user,
            channel_buffer_size: 8,
            ..RealtimeConfig::default()
        })
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let mgr = manager(5);
        let user = UserId::new();
        let (handle, _rx) = mgr.register(user);

        assert_eq!(mgr.lookup(user).len(), 1);
        assert_eq!(mgr.user_count(), 1);
        mgr.unregister(&handle.id);
        assert!(mgr.lookup(user).is_empty());
        assert!(!handle.is_alive());
    }

    #[tokio::test]
    async fn test_oldest_connection_replaced_at_limit() {
        let mgr = manager(1);
        let user = UserId::new();
        let (first, _rx1) = mgr.register(user);
        let (second, _rx2) = mgr.register(user);

        assert!(!first.is_alive());
        let live = mgr.lookup(user);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, second.id);
    }

    #[tokio::test]
    async fn test_ping_gets_pong_and_garbage_gets_error() {
        let mgr = manager(5);
        let (handle, mut rx) = mgr.register(UserId::new());

        mgr.handle_inbound(&handle.id, r#"{"type":"ping","timestamp":42}"#);
        let pong: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(pong["type"], "pong");
        assert_eq!(pong["timestamp"], 42);

        mgr.handle_inbound(&handle.id, "not json");
        let err: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(err["code"], "INVALID_MESSAGE");
    }

    #[tokio::test]
    async fn test_lookup_returns_every_tab() {
        let mgr = manager(5);
        let user = UserId::new();
        let (a, _rx_a) = mgr.register(user);
        let (b, _rx_b) = mgr.register(user);

        let mut ids: Vec<_> = mgr.lookup(user).iter().map(|h| h.id).collect();
        ids.sort_by_key(|id| id.to_string());
        let mut expected = vec![a.id, b.id];
        expected.sort_by_key(|id| id.to_string());
        assert_eq!(ids, expected);
        assert_eq!(mgr.connection_count(), 2);
    }
}
