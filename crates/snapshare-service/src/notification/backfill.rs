//! Event title backfill for notifications created before titles were stored.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use snapshare_core::error::AppError;
use snapshare_core::traits::EventDirectory;
use snapshare_core::types::id::EventId;
use snapshare_database::repositories::NotificationStore;

/// Totals from one backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    /// Distinct events selected.
    pub events_scanned: usize,
    /// Events whose title was written.
    pub events_titled: usize,
    /// Notification rows updated.
    pub records_updated: u64,
    /// Events that exist but have no title.
    pub events_without_title: usize,
    /// Events whose lookup or update failed.
    pub failures: usize,
}

/// Fills `event_title` on notifications that have an event but no title.
///
/// Work is batched by event: each selected event is looked up once and all
/// of its untitled rows are updated together. Rows that already carry a
/// title are never selected, so repeated runs are no-ops once caught up.
#[derive(Debug, Clone)]
pub struct TitleBackfill {
    store: Arc<dyn NotificationStore>,
    events: Arc<dyn EventDirectory>,
    batch_size: u32,
}

impl TitleBackfill {
    /// Creates a backfill over the given store and event directory.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        events: Arc<dyn EventDirectory>,
        batch_size: u32,
    ) -> Self {
        Self {
            store,
            events,
            batch_size: batch_size.max(1),
        }
    }

    /// Sweeps every untitled event once, `batch_size` events per page.
    ///
    /// Pages advance on an event-ID cursor, so events that cannot be titled
    /// are passed over rather than selected again. A failure for one event
    /// is logged and counted; the sweep moves on. Only failing to select a
    /// page aborts the run.
    pub async fn run(&self) -> Result<BackfillReport, AppError> {
        let mut report = BackfillReport::default();
        let mut cursor = None;

        loop {
            let event_ids = self
                .store
                .find_untitled_event_ids(cursor, self.batch_size)
                .await?;
            let Some(last) = event_ids.last().copied() else {
                break;
            };
            let page_len = event_ids.len();
            report.events_scanned += page_len;

            for event_id in event_ids {
                self.backfill_event(event_id, &mut report).await;
            }

            if page_len < self.batch_size as usize {
                break;
            }
            cursor = Some(last);
        }

        info!(
            scanned = report.events_scanned,
            titled = report.events_titled,
            updated = report.records_updated,
            failures = report.failures,
            "Event title backfill finished"
        );
        Ok(report)
    }

    async fn backfill_event(&self, event_id: EventId, report: &mut BackfillReport) {
        let title = match self.events.title(event_id).await {
            Ok(Some(title)) if !title.trim().is_empty() => title,
            Ok(_) => {
                report.events_without_title += 1;
                return;
            }
            Err(e) => {
                warn!(event_id = %event_id, error = %e, "Event title lookup failed during backfill");
                report.failures += 1;
                return;
            }
        };

        match self.store.set_event_title(event_id, &title).await {
            Ok(updated) => {
                report.events_titled += 1;
                report.records_updated += updated;
            }
            Err(e) => {
                error!(event_id = %event_id, error = %e, "Failed to backfill event title");
                report.failures += 1;
            }
        }
    }
}
