//! Live connection tracking.

pub mod handle;
pub mod manager;
pub mod pool;
pub mod registry;

pub use handle::{ConnectionHandle, ConnectionId, SendResult};
pub use manager::ConnectionManager;
pub use pool::ConnectionPool;
pub use registry::ConnectionRegistry;
