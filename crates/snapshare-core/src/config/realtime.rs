//! Real-time delivery configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Maximum live connections per user; the oldest is replaced beyond this.
    #[serde(default = "default_max_connections_per_user")]
    pub max_connections_per_user: usize,
    /// Outbound buffer per connection. A full buffer drops the push.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Placeholder used when an actor's display name cannot be resolved.
    #[serde(default = "default_unknown_sender")]
    pub unknown_sender_name: String,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            max_connections_per_user: default_max_connections_per_user(),
            channel_buffer_size: default_channel_buffer(),
            unknown_sender_name: default_unknown_sender(),
        }
    }
}

fn default_max_connections_per_user() -> usize {
    5
}

fn default_channel_buffer() -> usize {
    256
}

fn default_unknown_sender() -> String {
    "Unknown User".to_string()
}
