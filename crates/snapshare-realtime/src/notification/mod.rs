//! Notification creation and delivery: listeners, formatting, writer, pusher.

pub mod formatter;
pub mod listeners;
pub mod outcome;
pub mod pusher;
pub mod writer;

pub use listeners::NotificationListeners;
pub use outcome::{BroadcastReport, Delivery, PushOutcome};
pub use pusher::RealtimePusher;
pub use writer::NotificationWriter;
