//! Built-in job handler implementations.

pub mod backfill;

pub use backfill::TitleBackfillJob;
