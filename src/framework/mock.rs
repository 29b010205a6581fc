//! # Scripted Actor Endpoint
//!
//! Testing code that *talks to* an actor should not require spawning the real
//! collaborator. [`MockActor`] hands out a genuine [`ActorRef`] whose mailbox
//! the test drains by hand, scripting each reply (or withholding it) to drive
//! the caller down a chosen path — including paths that are hard to reach
//! with real actors, like a peer that accepts a call and never answers.
//!
//! ```
//! use async_trait::async_trait;
//! use listkeeper::framework::{ActorBehavior, InitContext, MockActor};
//!
//! struct Echo;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("echo fault")]
//! struct EchoFault;
//!
//! #[async_trait]
//! impl ActorBehavior for Echo {
//!     type Args = ();
//!     type Call = String;
//!     type Reply = String;
//!     type Cast = ();
//!     type Error = EchoFault;
//!
//!     async fn init(_: (), _: &InitContext<Self>) -> Result<Self, EchoFault> { Ok(Self) }
//!     async fn handle_call(&mut self, req: String) -> Result<String, EchoFault> { Ok(req) }
//!     async fn handle_cast(&mut self, _: ()) -> Result<(), EchoFault> { Ok(()) }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut mock = MockActor::<Echo>::new();
//!     let handle = mock.actor_ref();
//!
//!     let caller = tokio::spawn(async move { handle.call("ping".into()).await });
//!
//!     let (request, responder) = mock.expect_call().await;
//!     assert_eq!(request, "ping");
//!     responder.reply("pong".into());
//!
//!     assert_eq!(caller.await.unwrap().unwrap(), "pong");
//! }
//! ```

use crate::framework::behavior::ActorBehavior;
use crate::framework::handle::ActorRef;
use crate::framework::message::{Envelope, ReplyTo};
use tokio::sync::mpsc;

/// Mailbox capacity of the scripted endpoint; matches the runtime's.
const MOCK_MAILBOX: usize = 32;

/// A message a [`MockActor`] received from the code under test.
#[derive(Debug)]
pub enum MockMessage<B: ActorBehavior> {
    /// A call, with the responder the script uses to answer (or drops to
    /// simulate an actor that dies without replying).
    Call(B::Call, CallResponder<B>),
    /// A cast.
    Cast(B::Cast),
}

/// The scripted side of a call: consume it to send the reply, drop it to
/// leave the caller hanging until its deadline.
#[derive(Debug)]
pub struct CallResponder<B: ActorBehavior>(ReplyTo<B>);

impl<B: ActorBehavior> CallResponder<B> {
    /// Send the reply. Discarded silently if the caller already gave up —
    /// the late-reply no-op the runtime guarantees.
    pub fn reply(self, reply: B::Reply) {
        let _ = self.0.send(reply);
    }
}

/// A hand-driven stand-in for an actor of behavior `B`.
///
/// Unlike a spawned actor there is no loop and no state: the test *is* the
/// actor, receiving envelopes with [`MockActor::recv`] and replying when and
/// how the scenario demands. Dropping the mock closes the mailbox, which is
/// exactly how a terminated actor looks to its callers.
pub struct MockActor<B: ActorBehavior> {
    sender: mpsc::Sender<Envelope<B>>,
    receiver: mpsc::Receiver<Envelope<B>>,
}

impl<B: ActorBehavior> MockActor<B> {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel(MOCK_MAILBOX);
        Self { sender, receiver }
    }

    /// A handle indistinguishable from a real actor's, to inject into the
    /// code under test.
    pub fn actor_ref(&self) -> ActorRef<B> {
        ActorRef::new(self.sender.clone())
    }

    /// Next message sent to this endpoint, or `None` once every handle is
    /// dropped.
    pub async fn recv(&mut self) -> Option<MockMessage<B>> {
        self.receiver.recv().await.map(|envelope| match envelope {
            Envelope::Call {
                request,
                respond_to,
            } => MockMessage::Call(request, CallResponder(respond_to)),
            Envelope::Cast { request } => MockMessage::Cast(request),
        })
    }

    /// Receive the next message, asserting it is a call.
    ///
    /// # Panics
    /// Panics on a cast or a closed mailbox; this is test tooling, and a
    /// protocol mismatch should fail the test loudly.
    pub async fn expect_call(&mut self) -> (B::Call, CallResponder<B>) {
        match self.recv().await {
            Some(MockMessage::Call(request, responder)) => (request, responder),
            Some(MockMessage::Cast(request)) => {
                panic!("expected a call, got cast {request:?}")
            }
            None => panic!("expected a call, but every handle was dropped"),
        }
    }

    /// Receive the next message, asserting it is a cast.
    ///
    /// # Panics
    /// Panics on a call or a closed mailbox.
    pub async fn expect_cast(&mut self) -> B::Cast {
        match self.recv().await {
            Some(MockMessage::Cast(request)) => request,
            Some(MockMessage::Call(request, _)) => {
                panic!("expected a cast, got call {request:?}")
            }
            None => panic!("expected a cast, but every handle was dropped"),
        }
    }
}

impl<B: ActorBehavior> Default for MockActor<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::actor::InitContext;
    use crate::framework::error::ActorError;
    use async_trait::async_trait;
    use std::time::Duration;

    struct Probe;

    #[derive(Debug, thiserror::Error)]
    #[error("probe fault")]
    struct ProbeFault;

    #[async_trait]
    impl ActorBehavior for Probe {
        type Args = ();
        type Call = u32;
        type Reply = u32;
        type Cast = u32;
        type Error = ProbeFault;

        async fn init(_: (), _: &InitContext<Self>) -> Result<Self, ProbeFault> {
            Ok(Self)
        }

        async fn handle_call(&mut self, n: u32) -> Result<u32, ProbeFault> {
            Ok(n)
        }

        async fn handle_cast(&mut self, _: u32) -> Result<(), ProbeFault> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn withheld_reply_surfaces_as_timeout() {
        let mut mock = MockActor::<Probe>::new();
        let handle = mock.actor_ref();

        let caller =
            tokio::spawn(async move { handle.call_timeout(1, Duration::from_millis(30)).await });

        // Receive the call but sit on the responder past the deadline.
        let (request, responder) = mock.expect_call().await;
        assert_eq!(request, 1);
        let result = caller.await.unwrap();
        assert_eq!(result, Err(ActorError::Timeout(Duration::from_millis(30))));

        // Replying now must be a harmless no-op.
        responder.reply(99);
    }

    #[tokio::test]
    async fn dropped_responder_reads_as_dead_actor() {
        let mut mock = MockActor::<Probe>::new();
        let handle = mock.actor_ref();

        let caller = tokio::spawn(async move { handle.call(2).await });

        let (_, responder) = mock.expect_call().await;
        drop(responder);
        assert_eq!(caller.await.unwrap(), Err(ActorError::ActorDropped));
    }

    #[tokio::test]
    async fn dropped_mock_reads_as_closed_mailbox() {
        let mock = MockActor::<Probe>::new();
        let handle = mock.actor_ref();
        drop(mock);

        assert_eq!(handle.cast(3).await, Err(ActorError::ActorClosed));
    }
}
