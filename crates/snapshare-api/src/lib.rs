//! # snapshare-api
//!
//! HTTP API layer for SnapShare notifications built on Axum.
//!
//! Provides the notification listing and bulk read/delete endpoints, the
//! action intake that feeds the notification listeners, the WebSocket
//! upgrade for live delivery, middleware, extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
