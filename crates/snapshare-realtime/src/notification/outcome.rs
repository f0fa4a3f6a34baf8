//! Outcomes of best-effort notification delivery.
//!
//! Nothing here is an error for the caller: these values exist to be logged
//! and counted.

use snapshare_core::types::id::{NotificationId, UserId};

/// What happened when pushing one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Queued on this many live connections.
    Delivered(usize),
    /// Recipient had no live connection.
    Offline,
    /// Recipient was connected but every connection refused the frame.
    Dropped,
}

/// What happened for one recipient of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Persisted; the push outcome says whether it also went out live.
    Stored {
        /// Recipient.
        recipient: UserId,
        /// Stored record.
        notification_id: NotificationId,
        /// Real-time result.
        push: PushOutcome,
    },
    /// The store rejected the write; nothing was pushed.
    WriteFailed {
        /// Recipient.
        recipient: UserId,
        /// Store error text.
        error: String,
    },
    /// Not attempted.
    Skipped {
        /// Why.
        reason: &'static str,
    },
}

impl Delivery {
    /// Whether a record was persisted.
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }

    /// Whether the record also reached a live connection.
    pub fn is_pushed(&self) -> bool {
        matches!(
            self,
            Self::Stored {
                push: PushOutcome::Delivered(_),
                ..
            }
        )
    }
}

/// Tally for a fan-out to many recipients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Recipients a write was attempted for.
    pub attempted: usize,
    /// Records persisted.
    pub written: usize,
    /// Records pushed live.
    pub pushed: usize,
    /// Writes that failed.
    pub failed: usize,
}

impl BroadcastReport {
    /// Summarize a set of deliveries.
    pub fn from_deliveries(deliveries: &[Delivery]) -> Self {
        deliveries.iter().fold(Self::default(), |mut report, d| {
            match d {
                Delivery::Stored { .. } => {
                    report.attempted += 1;
                    report.written += 1;
                    if d.is_pushed() {
                        report.pushed += 1;
                    }
                }
                Delivery::WriteFailed { .. } => {
                    report.attempted += 1;
                    report.failed += 1;
                }
                Delivery::Skipped { .. } => {}
            }
            report
        })
    }
}
