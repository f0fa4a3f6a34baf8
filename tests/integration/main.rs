//! End-to-end tests over the in-memory store: actions in, grouped
//! notifications out, bulk actions, and maintenance.

mod backfill_test;
mod broadcast_test;
mod helpers;
mod pipeline_test;
