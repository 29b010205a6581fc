//! # Actor Handle
//!
//! [`ActorRef`] is the only way to reach a running actor: an opaque, cheaply
//! cloneable reference to its mailbox. All cross-actor communication goes
//! through [`ActorRef::call`] and [`ActorRef::cast`]; there is no shared
//! memory to reach around it.

use crate::framework::behavior::ActorBehavior;
use crate::framework::error::ActorError;
use crate::framework::message::Envelope;
use std::fmt;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Default deadline applied by [`ActorRef::call`].
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to a running actor's mailbox.
///
/// Holds only a channel sender, so cloning is cheap and handles can be passed
/// freely between tasks. A handle stays valid after its actor terminates;
/// sends through a stale handle fail with [`ActorError::ActorClosed`] instead
/// of panicking.
pub struct ActorRef<B: ActorBehavior> {
    sender: mpsc::Sender<Envelope<B>>,
}

impl<B: ActorBehavior> ActorRef<B> {
    pub(crate) fn new(sender: mpsc::Sender<Envelope<B>>) -> Self {
        Self { sender }
    }

    /// Send a call and wait for the reply, with the default 5 second
    /// deadline.
    pub async fn call(&self, request: B::Call) -> Result<B::Reply, ActorError> {
        self.call_timeout(request, DEFAULT_CALL_TIMEOUT).await
    }

    /// Send a call and wait for the reply, giving up after `deadline`.
    ///
    /// Only this caller suspends; the runtime keeps scheduling everything
    /// else. A timeout does not cancel the work in flight — the actor may
    /// still finish and reply into the abandoned channel, which is discarded.
    pub async fn call_timeout(
        &self,
        request: B::Call,
        deadline: Duration,
    ) -> Result<B::Reply, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope::Call {
                request,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        match tokio::time::timeout(deadline, response).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(_)) => Err(ActorError::ActorDropped),
            Err(_) => Err(ActorError::Timeout(deadline)),
        }
    }

    /// Enqueue a cast and return as soon as it is accepted by the mailbox.
    ///
    /// `Ok` means "enqueued", not "processed": the actor's eventual success
    /// or failure is unobservable to this caller.
    pub async fn cast(&self, request: B::Cast) -> Result<(), ActorError> {
        self.sender
            .send(Envelope::Cast { request })
            .await
            .map_err(|_| ActorError::ActorClosed)
    }

    /// Whether two handles point at the same actor.
    pub fn same_actor(&self, other: &Self) -> bool {
        self.sender.same_channel(&other.sender)
    }
}

// Manual impls: derives would demand `B: Clone`/`B: Debug`, which the handle
// does not need.
impl<B: ActorBehavior> Clone for ActorRef<B> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<B: ActorBehavior> fmt::Debug for ActorRef<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = std::any::type_name::<B>().split("::").last().unwrap_or("?");
        f.debug_struct("ActorRef").field("actor", &actor).finish()
    }
}
