//! Sharded persistence tier.
//!
//! A [`StorageRouter`] actor fronts a fixed pool of [`ShardWorker`] actors.
//! Keys are hashed onto workers deterministically; each worker exclusively
//! owns one shard directory and serializes every read and write for the keys
//! that land on it. Last write wins per key; nothing stronger is promised.

pub mod codec;
pub mod error;
pub mod router;
pub mod worker;

pub use error::StorageError;
pub use router::{
    stable_hash, RouterArgs, RouterCall, RouterCast, RouterReply, StorageRouter,
    DEFAULT_SHARD_COUNT,
};
pub use worker::{shard_dir, ShardWorker, WorkerArgs, WorkerCall, WorkerCast};
