//! Event title backfill job.

use async_trait::async_trait;
use serde_json::Value;
use tracing;

use snapshare_service::notification::TitleBackfill;

use crate::executor::{JobExecutionError, JobHandler, JobRun};

/// Runs one [`TitleBackfill`] sweep per execution.
#[derive(Debug)]
pub struct TitleBackfillJob {
    backfill: TitleBackfill,
}

impl TitleBackfillJob {
    /// Job type this handler is registered under.
    pub const JOB_TYPE: &'static str = "title_backfill";

    /// Create a new backfill job handler
    pub fn new(backfill: TitleBackfill) -> Self {
        Self { backfill }
    }
}

#[async_trait]
impl JobHandler for TitleBackfillJob {
    fn job_type(&self) -> &str {
        Self::JOB_TYPE
    }

    async fn execute(&self, run: &JobRun) -> Result<Option<Value>, JobExecutionError> {
        let report = self
            .backfill
            .run()
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Backfill selection failed: {e}")))?;

        if report.failures > 0 {
            tracing::warn!(
                run_id = %run.id,
                failures = report.failures,
                "Backfill finished with per-event failures"
            );
        }

        let summary = serde_json::to_value(report).map_err(|e| {
            JobExecutionError::Permanent(format!("Failed to serialize backfill report: {e}"))
        })?;
        Ok(Some(summary))
    }
}
