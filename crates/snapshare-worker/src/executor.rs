//! Dispatches job runs to registered handlers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use snapshare_core::error::AppError;

/// One execution of a job, triggered by the scheduler or the CLI.
#[derive(Debug, Clone)]
pub struct JobRun {
    /// Run ID, used to correlate log lines.
    pub id: Uuid,
    /// Handler to dispatch to.
    pub job_type: String,
    /// When the run was triggered.
    pub triggered_at: DateTime<Utc>,
}

impl JobRun {
    /// Create a run of `job_type` triggered now.
    pub fn new(job_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_type: job_type.into(),
            triggered_at: Utc::now(),
        }
    }
}

/// Trait for job handler implementations
#[async_trait]
pub trait JobHandler: Send + Sync + std::fmt::Debug {
    /// Get the job type this handler processes
    fn job_type(&self) -> &str;

    /// Execute one run and return a JSON summary
    async fn execute(&self, run: &JobRun) -> Result<Option<Value>, JobExecutionError>;
}

/// Error from job execution
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// Permanent failure, do not retry
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure; the next scheduled run may succeed
    #[error("Transient job failure: {0}")]
    Transient(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}

/// Dispatches job runs to the appropriate handler based on job_type
#[derive(Debug, Default)]
pub struct JobExecutor {
    /// Registered job handlers by type
    handlers: HashMap<String, Arc<dyn JobHandler>>,
}

impl JobExecutor {
    /// Create a new job executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job handler
    pub fn register(&mut self, handler: Arc<dyn JobHandler>) {
        let job_type = handler.job_type().to_string();
        tracing::info!("Registered job handler for type '{}'", job_type);
        self.handlers.insert(job_type, handler);
    }

    /// Execute a run by dispatching to the correct handler
    pub async fn execute(&self, run: &JobRun) -> Result<Option<Value>, JobExecutionError> {
        let handler = self.handlers.get(&run.job_type).ok_or_else(|| {
            JobExecutionError::Permanent(format!(
                "No handler registered for job type '{}'",
                run.job_type
            ))
        })?;

        tracing::info!(run_id = %run.id, job_type = %run.job_type, "Executing job");
        handler.execute(run).await
    }

    /// Check if a handler is registered for a job type
    pub fn has_handler(&self, job_type: &str) -> bool {
        self.handlers.contains_key(job_type)
    }
}
