//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background maintenance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether scheduled maintenance runs inside the server process.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression (with seconds) for the event-title backfill sweep.
    #[serde(default = "default_backfill_cron")]
    pub backfill_cron: String,
    /// Maximum untitled records fetched per sweep.
    #[serde(default = "default_backfill_batch")]
    pub backfill_batch_size: u32,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backfill_cron: default_backfill_cron(),
            backfill_batch_size: default_backfill_batch(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_backfill_cron() -> String {
    "0 0 3 * * *".to_string()
}

fn default_backfill_batch() -> u32 {
    5000
}
