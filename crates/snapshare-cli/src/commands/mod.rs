//! CLI command definitions and dispatch.

pub mod backfill;
pub mod migrate;
pub mod notifications;
pub mod serve;

use clap::{Parser, Subcommand};

use snapshare_core::config::AppConfig;
use snapshare_core::error::AppError;

use crate::output::OutputFormat;

/// Operate a SnapShare notification deployment
#[derive(Debug, Parser)]
#[command(name = "snapshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the notification server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Fill in missing event titles on stored notifications
    BackfillTitles(backfill::BackfillArgs),
    /// Inspect a user's notifications
    Notifications(notifications::NotificationsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate => migrate::execute(&self.config, self.format).await,
            Commands::BackfillTitles(args) => {
                backfill::execute(args, &self.config, self.format).await
            }
            Commands::Notifications(args) => {
                notifications::execute(args, &self.config, self.format).await
            }
        }
    }
}

/// Loads the layered configuration rooted at `config_path`.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
