//! Traits implemented by the storage layer and consumed by the notification
//! pipeline.

pub mod directory;

pub use directory::{EventDirectory, ProfileDirectory};
