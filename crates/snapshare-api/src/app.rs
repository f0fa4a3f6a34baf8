//! Server bootstrap: storage, scheduled backfill, then HTTP until Ctrl+C.

use std::sync::Arc;

use tokio::net::TcpListener;

use snapshare_core::config::AppConfig;
use snapshare_core::error::AppError;
use snapshare_database::StorageBackend;
use snapshare_service::TitleBackfill;
use snapshare_worker::jobs::TitleBackfillJob;
use snapshare_worker::{CronScheduler, JobExecutor};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the SnapShare notification server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SnapShare notifications v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Storage ──────────────────────────────────────────
    let backend = StorageBackend::open(&config.database, true).await?;

    // ── Step 2: Scheduled maintenance ────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(TitleBackfillJob::new(TitleBackfill::new(
            Arc::clone(&backend.store),
            Arc::clone(&backend.events),
            config.worker.backfill_batch_size,
        ))));

        let scheduler = CronScheduler::new(Arc::new(executor)).await?;
        scheduler
            .register_title_backfill(&config.worker.backfill_cron)
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── Step 3: HTTP server ──────────────────────────────────────
    let bind_address = config.server.bind_address();
    let state = AppState::new(config, &backend);
    let connections = Arc::clone(&state.connections);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Shutdown ─────────────────────────────────────────────────
    tracing::info!("Shutting down...");
    connections.close_all();
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    if let Some(pool) = &backend.pool {
        pool.close().await;
    }

    tracing::info!("SnapShare notifications stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
