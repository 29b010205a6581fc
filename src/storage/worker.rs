//! # Shard Worker
//!
//! One `ShardWorker` actor owns one shard directory and is the only writer
//! and reader of the files in it. The worker caches nothing: every `Get`
//! re-reads and every `Store` re-writes the backing file, so the file is the
//! single source of truth and the worker's FIFO mailbox is what serializes
//! access to it.

use crate::framework::{ActorBehavior, InitContext};
use crate::model::TodoList;
use crate::storage::codec;
use crate::storage::error::StorageError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Synchronous requests handled by a worker.
#[derive(Debug)]
pub enum WorkerCall {
    /// Read the record stored under `name`, if any.
    Get { name: String },
}

/// Fire-and-forget requests handled by a worker.
#[derive(Debug)]
pub enum WorkerCast {
    /// Overwrite the record stored under `name`.
    Store { name: String, list: TodoList },
}

/// Startup arguments: which shard this is and where its files live.
#[derive(Debug)]
pub struct WorkerArgs {
    pub shard: usize,
    pub dir: PathBuf,
}

/// Persistence actor for a single shard.
pub struct ShardWorker {
    shard: usize,
    dir: PathBuf,
}

impl ShardWorker {
    /// Stable location for a key. Hex keeps arbitrary list names
    /// filesystem-safe and collision-free.
    fn file_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", hex::encode(name)))
    }
}

#[async_trait]
impl ActorBehavior for ShardWorker {
    type Args = WorkerArgs;
    type Call = WorkerCall;
    type Reply = Option<TodoList>;
    type Cast = WorkerCast;
    type Error = StorageError;

    async fn init(args: WorkerArgs, _ctx: &InitContext<Self>) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(&args.dir).await?;
        info!(shard = args.shard, dir = %args.dir.display(), "Shard worker ready");
        Ok(Self {
            shard: args.shard,
            dir: args.dir,
        })
    }

    async fn handle_call(&mut self, request: WorkerCall) -> Result<Option<TodoList>, StorageError> {
        match request {
            WorkerCall::Get { name } => {
                let path = self.file_for(&name);
                match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let list = codec::decode(&bytes)?;
                        debug!(shard = self.shard, %name, entries = list.len(), "Loaded");
                        Ok(Some(list))
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        debug!(shard = self.shard, %name, "No record");
                        Ok(None)
                    }
                    Err(e) => Err(StorageError::Io(e)),
                }
            }
        }
    }

    async fn handle_cast(&mut self, request: WorkerCast) -> Result<(), StorageError> {
        match request {
            WorkerCast::Store { name, list } => {
                let bytes = codec::encode(&list)?;
                tokio::fs::write(self.file_for(&name), bytes).await?;
                debug!(shard = self.shard, %name, entries = list.len(), "Stored");
                Ok(())
            }
        }
    }
}

/// Shard directory under a storage root, `shard-0`, `shard-1`, …
pub fn shard_dir(root: &Path, shard: usize) -> PathBuf {
    root.join(format!("shard-{shard}"))
}
