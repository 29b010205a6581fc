//! # Generic Messages
//!
//! The envelope type carried by every actor mailbox. Callers never build
//! envelopes by hand; [`ActorRef`](crate::framework::ActorRef) wraps requests
//! on their way in.

use crate::framework::behavior::ActorBehavior;
use tokio::sync::oneshot;

/// One-shot channel on which a call's reply travels back to the caller.
///
/// Each call gets a fresh channel, so a reply that arrives after the caller
/// gave up (timeout, drop) lands in a closed channel and is discarded — a
/// safe no-op, never a crash.
pub type ReplyTo<B> = oneshot::Sender<<B as ActorBehavior>::Reply>;

/// A queued message: either a call awaiting a reply or a one-way cast.
///
/// The mailbox is strictly FIFO over these envelopes regardless of variant —
/// calls get no priority over casts. That single ordering rule is the only
/// serialization mechanism in the system.
#[derive(Debug)]
pub enum Envelope<B: ActorBehavior> {
    /// Synchronous request; the reply is sent on `respond_to`.
    Call {
        request: B::Call,
        respond_to: ReplyTo<B>,
    },
    /// Fire-and-forget request.
    Cast { request: B::Cast },
}
