//! Individual WebSocket connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use snapshare_core::types::id::UserId;

/// Unique connection identifier
pub type ConnectionId = Uuid;

/// Result of handing one frame to a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendResult {
    /// Queued for the socket writer.
    Sent,
    /// Outbound buffer full; frame dropped.
    Full,
    /// Socket gone; frame dropped and the handle marked dead.
    Closed,
}

/// A handle to a single WebSocket connection.
///
/// Holds the sender side of the connection's outbound queue. Frames are
/// already-serialized JSON.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID
    pub id: ConnectionId,
    /// User who owns this connection
    pub user_id: UserId,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
    sender: mpsc::Sender<String>,
    alive: AtomicBool,
}

impl ConnectionHandle {
    /// Create a new connection handle
    pub fn new(user_id: UserId, sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            connected_at: Utc::now(),
            sender,
            alive: AtomicBool::new(true),
        }
    }

    /// Queue a frame without waiting. Never blocks the caller.
    pub fn send(&self, frame: String) -> SendResult {
        if !self.is_alive() {
            return SendResult::Closed;
        }
        match self.sender.try_send(frame) {
            Ok(()) => SendResult::Sent,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Connection send buffer full, dropping message");
                SendResult::Full
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                SendResult::Closed
            }
        }
    }

    /// Check if connection is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark connection as closed
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
