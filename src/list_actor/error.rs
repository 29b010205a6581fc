//! Error types for the list server.

use crate::framework::ActorError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during list operations.
#[derive(Debug, Error)]
pub enum ListError {
    /// Loading or persisting the list through the storage tier failed.
    #[error("list persistence failed: {0}")]
    Storage(#[from] StorageError),

    /// The list server itself is gone or did not answer in time.
    #[error("list actor unavailable: {0}")]
    Actor(#[from] ActorError),

    /// An external request was processed before hydration. The creation
    /// protocol makes this unreachable; seeing it means the protocol was
    /// violated, which faults the actor.
    #[error("request arrived before hydration")]
    NotHydrated,
}
