//! Error type for the persistence tier.

use crate::framework::ActorError;
use thiserror::Error;

/// Failures of the sharded storage tier.
///
/// A missing record on read is *not* an error — workers report it as
/// `Ok(None)`. These variants cover real faults: I/O, undecodable records,
/// unreachable storage actors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("storage record codec failed: {0}")]
    Codec(#[from] serde_json::Error),

    /// The router or a worker is gone or did not answer in time.
    #[error("storage actor unavailable: {0}")]
    Actor(#[from] ActorError),

    /// The router answered a request with the wrong reply variant.
    #[error("unexpected reply from the storage router")]
    UnexpectedReply,

    /// A router cannot be built over an empty worker pool.
    #[error("shard count must be at least 1")]
    NoShards,
}
