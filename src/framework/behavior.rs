//! # ActorBehavior Trait
//!
//! The `ActorBehavior` trait is the contract every actor role in the system
//! (registry, storage router, shard worker, list server) implements to be run
//! by the generic runtime in [`crate::framework::actor`]. It fixes the message
//! vocabulary of the role through associated types and supplies the three
//! callbacks the message loop drives: `init`, `handle_call`, `handle_cast`.

use crate::framework::actor::InitContext;
use async_trait::async_trait;
use std::fmt::Debug;

/// Contract implemented by each actor role managed by the generic runtime.
///
/// # Architecture Note
/// By pushing everything role-specific behind this trait we write the message
/// loop *once* and reuse it for every actor in the system. Associated types
/// keep the roles apart at compile time: a request meant for the storage
/// router simply does not type-check against a list server's handle.
///
/// # Concurrency Model
/// The implementing value *is* the actor's state. After [`spawn`] hands it to
/// the message loop, no other code can reach it — handlers take `&mut self`
/// and run one at a time, so no locking is ever needed.
///
/// [`spawn`]: crate::framework::actor::spawn
#[async_trait]
pub trait ActorBehavior: Sized + Send + 'static {
    /// Arguments handed to [`ActorBehavior::init`] by [`spawn`].
    ///
    /// [`spawn`]: crate::framework::actor::spawn
    type Args: Send + 'static;

    /// Request payload of a synchronous call.
    type Call: Send + Debug;

    /// Response produced by [`ActorBehavior::handle_call`].
    type Reply: Send + Debug;

    /// Request payload of a fire-and-forget cast.
    type Cast: Send + Debug;

    /// The role's error type. A handler returning `Err` is a fault: the
    /// runtime logs it and terminates the actor without replying.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compute the starting state.
    ///
    /// Runs to completion *before* the handle is published, so anything it
    /// enqueues through [`InitContext::cast_to_self`] is guaranteed to be
    /// processed ahead of every externally sent message. Keep it cheap:
    /// expensive setup belongs in a self-cast processed by the loop (see the
    /// list server's hydration), not here, or the creator blocks on it.
    async fn init(args: Self::Args, ctx: &InitContext<Self>) -> Result<Self, Self::Error>;

    /// Handle a synchronous request and produce the reply sent back to the
    /// caller's one-shot channel.
    async fn handle_call(&mut self, request: Self::Call) -> Result<Self::Reply, Self::Error>;

    /// Handle a fire-and-forget request. The caller never learns the outcome.
    async fn handle_cast(&mut self, request: Self::Cast) -> Result<(), Self::Error>;
}
