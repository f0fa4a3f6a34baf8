//! WebSocket message definitions.

pub mod types;

pub use types::{InboundMessage, OutboundMessage};
