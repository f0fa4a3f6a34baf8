//! # snapshare-core
//!
//! Core crate for SnapShare notifications. Contains configuration schemas,
//! typed identifiers, the domain actions that trigger notifications, the
//! lookup traits for the profile and event services, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other SnapShare crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
