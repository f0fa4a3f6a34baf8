//! Database migration command.

use snapshare_core::config::StoreProvider;
use snapshare_core::error::AppError;
use snapshare_database::{DatabasePool, migration};

use crate::output::{self, OutputFormat};

/// Applies pending migrations, then lists what the binary embeds.
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if config.database.provider != StoreProvider::Postgres {
        output::warning("database.provider is not \"postgres\"; nothing to migrate");
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let applied = migration::run_migrations(pool.pool()).await;
    pool.close().await;
    applied?;

    let embedded = migration::embedded();
    let fields = embedded
        .iter()
        .map(|(version, description)| ("migration", format!("{version:04} {description}")))
        .collect();
    output::print_fields(fields, &embedded, format)?;
    output::success("Schema is up to date");
    Ok(())
}
