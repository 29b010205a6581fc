//! # Runtime Errors
//!
//! Errors raised by the actor runtime itself. Role-specific failures live in
//! each actor's own error enum; these are the transport-level outcomes every
//! caller has to be prepared for.

use std::time::Duration;

/// Errors a caller can observe when talking to an actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActorError {
    /// No reply arrived within the deadline. The actor was not cancelled and
    /// may still complete the work; only this call stops waiting.
    #[error("call timed out after {0:?}")]
    Timeout(Duration),

    /// The actor's mailbox is gone — the actor terminated or was never
    /// started. Sends to a stale handle end up here.
    #[error("actor closed")]
    ActorClosed,

    /// The actor accepted the call but terminated before replying.
    #[error("actor dropped response channel")]
    ActorDropped,
}
