//! Selects the storage implementation from configuration.

use std::sync::Arc;

use tracing::info;

use snapshare_core::config::{DatabaseConfig, StoreProvider};
use snapshare_core::result::AppResult;
use snapshare_core::traits::{EventDirectory, ProfileDirectory};

use crate::connection::DatabasePool;
use crate::migration;
use crate::repositories::{
    MemoryDirectory, MemoryNotificationStore, NotificationRepository, NotificationStore,
    PgDirectory,
};

/// The store plus directory lookups the notification pipeline needs.
#[derive(Debug, Clone)]
pub struct StorageBackend {
    /// Notification records.
    pub store: Arc<dyn NotificationStore>,
    /// Actor display names.
    pub profiles: Arc<dyn ProfileDirectory>,
    /// Event titles and followers.
    pub events: Arc<dyn EventDirectory>,
    /// PostgreSQL pool, when that provider is in use.
    pub pool: Option<DatabasePool>,
}

impl StorageBackend {
    /// Opens the configured provider. PostgreSQL connections also run
    /// pending migrations when `migrate` is set.
    pub async fn open(config: &DatabaseConfig, migrate: bool) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if migrate {
                    migration::run_migrations(pool.pool()).await?;
                }
                let directory = Arc::new(PgDirectory::new(pool.pool().clone()));
                Ok(Self {
                    store: Arc::new(NotificationRepository::new(pool.pool().clone())),
                    profiles: directory.clone(),
                    events: directory,
                    pool: Some(pool),
                })
            }
            StoreProvider::Memory => {
                info!("Using in-memory notification store; records are not persisted");
                Ok(Self::in_memory(
                    Arc::new(MemoryNotificationStore::new()),
                    Arc::new(MemoryDirectory::new()),
                ))
            }
        }
    }

    /// Builds a backend from in-memory parts.
    pub fn in_memory(store: Arc<MemoryNotificationStore>, directory: Arc<MemoryDirectory>) -> Self {
        Self {
            store,
            profiles: directory.clone(),
            events: directory,
            pool: None,
        }
    }
}
