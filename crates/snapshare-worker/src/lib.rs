//! Background jobs for SnapShare notifications.
//!
//! This crate provides:
//! - A job executor that dispatches runs to the registered handler
//! - A cron scheduler that triggers periodic maintenance runs
//! - The event title backfill job

pub mod executor;
pub mod jobs;
pub mod scheduler;

pub use executor::{JobExecutionError, JobExecutor, JobHandler, JobRun};
pub use scheduler::CronScheduler;
