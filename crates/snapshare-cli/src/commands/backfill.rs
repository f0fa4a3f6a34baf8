//! Event title backfill command.

use clap::Args;

use snapshare_core::error::AppError;
use snapshare_database::StorageBackend;
use snapshare_service::TitleBackfill;

use crate::output::{self, OutputFormat};

/// Arguments for the backfill-titles command
#[derive(Debug, Args)]
pub struct BackfillArgs {
    /// Events per page (defaults to worker.backfill_batch_size)
    #[arg(long)]
    pub batch_size: Option<u32>,
}

/// Sweeps every untitled event once and prints the report.
pub async fn execute(
    args: &BackfillArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let backend = StorageBackend::open(&config.database, false).await?;
    let backfill = TitleBackfill::new(
        backend.store.clone(),
        backend.events.clone(),
        args.batch_size.unwrap_or(config.worker.backfill_batch_size),
    );

    let outcome = backfill.run().await;
    if let Some(pool) = &backend.pool {
        pool.close().await;
    }
    let report = outcome?;

    output::print_fields(
        vec![
            ("events scanned", report.events_scanned.to_string()),
            ("events titled", report.events_titled.to_string()),
            ("records updated", report.records_updated.to_string()),
            ("events without title", report.events_without_title.to_string()),
            ("failures", report.failures.to_string()),
        ],
        &report,
        format,
    )?;
    if report.failures > 0 {
        output::warning(&format!("{} event(s) failed; see logs", report.failures));
    }
    Ok(())
}
