//! Notification inspection commands.

use clap::{Args, Subcommand};
use tabled::Tabled;

use snapshare_core::error::AppError;
use snapshare_core::types::id::UserId;
use snapshare_database::StorageBackend;
use snapshare_entity::notification::{Notification, NotificationGroup};
use snapshare_service::{NotificationService, RequestContext};

use crate::output::{self, OutputFormat};

/// Arguments for the notifications command
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Notifications subcommand
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

/// Notifications subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List a user's notifications, newest first
    List {
        /// Recipient user ID
        #[arg(long)]
        user: UserId,
        /// Show grouped display entries instead of raw records
        #[arg(long)]
        grouped: bool,
    },
}

/// One raw notification as a table row.
#[derive(Debug, Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Read")]
    read: bool,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            kind: n.kind.to_string(),
            message: n.message.clone(),
            read: n.read,
            created_at: n.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// One grouped entry as a table row.
#[derive(Debug, Tabled)]
struct GroupRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Read")]
    read: bool,
    #[tabled(rename = "Latest")]
    latest_at: String,
}

impl From<&NotificationGroup> for GroupRow {
    fn from(g: &NotificationGroup) -> Self {
        Self {
            kind: g.kind.to_string(),
            count: g.count,
            message: g.message.clone(),
            read: g.read,
            latest_at: g.latest_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute notifications commands
pub async fn execute(
    args: &NotificationsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let backend = StorageBackend::open(&config.database, false).await?;
    let service = NotificationService::new(backend.store.clone());

    match &args.command {
        NotificationsCommand::List { user, grouped } => {
            let ctx = RequestContext::new(*user);
            if *grouped {
                let groups = service.list_grouped(&ctx).await?;
                let rows: Vec<GroupRow> = groups.iter().map(GroupRow::from).collect();
                output::print_rows(&rows, &groups, format)?;
            } else {
                let list = service.list(&ctx).await?;
                let rows: Vec<NotificationRow> = list.iter().map(NotificationRow::from).collect();
                output::print_rows(&rows, &list, format)?;
            }
        }
    }

    Ok(())
}
