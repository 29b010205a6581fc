use crate::clients::{RegistryClient, StorageClient};
use crate::framework::spawn;
use crate::registry::{ListRegistry, RegistryArgs, RegistryError};
use crate::storage::{RouterArgs, StorageError, StorageRouter, DEFAULT_SHARD_COUNT};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Construction parameters for a [`TodoSystem`].
#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// Directory the shard directories are created under.
    pub storage_root: PathBuf,
    /// Size of the worker pool; fixed for the system's lifetime.
    pub shard_count: usize,
}

impl TodoConfig {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
            shard_count: DEFAULT_SHARD_COUNT,
        }
    }

    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }
}

/// Failures while wiring the system together.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to start storage tier: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to start registry: {0}")]
    Registry(#[from] RegistryError),
}

/// The assembled application: a storage router with its worker pool, and a
/// registry handing out per-list clients.
///
/// # Example
///
/// ```ignore
/// let system = TodoSystem::start(TodoConfig::new("data")).await?;
///
/// let groceries = system.registry.resolve("groceries").await?;
/// groceries.add(TodoCreate::new("Milk", today)).await?;
///
/// system.shutdown();
/// ```
pub struct TodoSystem {
    /// Entry point for callers: resolve list names to list clients.
    pub registry: RegistryClient,
    /// Direct access to the persistence tier, for tools and tests.
    pub storage: StorageClient,
}

impl TodoSystem {
    /// Start the storage tier, then the registry wired to it.
    ///
    /// Actors are created leaves-first so every dependency a handle is
    /// injected into is already running.
    pub async fn start(config: TodoConfig) -> Result<Self, SystemError> {
        let router = spawn::<StorageRouter>(RouterArgs {
            root: config.storage_root.clone(),
            shards: config.shard_count,
        })
        .await?;
        let storage = StorageClient::new(router);

        let registry = spawn::<ListRegistry>(RegistryArgs {
            storage: storage.clone(),
        })
        .await?;

        info!(
            shards = config.shard_count,
            root = %config.storage_root.display(),
            "System started"
        );
        Ok(Self {
            registry: RegistryClient::new(registry),
            storage,
        })
    }

    /// Shut the system down by closing its channels.
    ///
    /// Dropping the top-level clients closes the registry's and router's
    /// mailboxes; each actor drains what it already accepted and exits,
    /// dropping its own downstream handles, which cascades the closure
    /// through list servers and workers.
    pub fn shutdown(self) {
        info!("Shutting down system");
        drop(self.registry);
        drop(self.storage);
    }
}
