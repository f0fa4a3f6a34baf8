//! Start the notification server.

use clap::Args;

use snapshare_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Applies overrides and runs the server until Ctrl+C.
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    output::success(&format!(
        "Serving notifications on {} ({:?} store, worker {})",
        config.server.bind_address(),
        config.database.provider,
        if config.worker.enabled { "on" } else { "off" },
    ));

    snapshare_api::run_server(config).await
}
