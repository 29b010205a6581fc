//! Error types for the registry.

use crate::framework::ActorError;
use crate::list_actor::ListError;
use thiserror::Error;

/// Errors that can occur while resolving list servers.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry actor is gone or did not answer in time.
    #[error("registry unavailable: {0}")]
    Actor(#[from] ActorError),

    /// Creating a list server for an unseen name failed.
    #[error("failed to start list server: {0}")]
    Spawn(#[from] ListError),

    /// The registry answered a request with the wrong reply variant.
    #[error("unexpected reply from the registry")]
    UnexpectedReply,
}
