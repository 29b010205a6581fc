//! # Generic Actor Runtime
//!
//! Turns an [`ActorBehavior`] implementation into a running actor: a private
//! state value driven by a strictly FIFO message loop on its own tokio task.
//!
//! # Architecture Note
//! The loop is the whole concurrency story. Messages from any number of
//! senders are funneled through one bounded mpsc channel and processed one at
//! a time, so the behavior's state needs no locks and can never be observed
//! mid-update. Everything else in this crate (per-key write ordering, the
//! registry's duplicate-free creation) is built by leaning on this single
//! guarantee.

use crate::framework::behavior::ActorBehavior;
use crate::framework::error::ActorError;
use crate::framework::handle::ActorRef;
use crate::framework::message::Envelope;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Mailbox capacity for every actor. Senders to a full mailbox wait for
/// space, which keeps a slow actor from buffering unbounded work.
const MAILBOX_CAPACITY: usize = 32;

/// Handed to [`ActorBehavior::init`] while the actor is still private.
///
/// Lets `init` prime its own mailbox before any other party can obtain the
/// handle — the mechanism behind asynchronous self-initialization: enqueue a
/// cast to yourself, return immediately, and do the expensive work when the
/// loop processes that cast, with every later message queued behind it.
pub struct InitContext<B: ActorBehavior> {
    sender: mpsc::Sender<Envelope<B>>,
}

impl<B: ActorBehavior> InitContext<B> {
    /// Enqueue a cast that the loop will process before any externally sent
    /// message. The ordering holds because the handle is not published until
    /// `init` returns.
    pub fn cast_to_self(&self, request: B::Cast) -> Result<(), ActorError> {
        self.sender
            .try_send(Envelope::Cast { request })
            .map_err(|_| ActorError::ActorClosed)
    }

    /// A handle to the actor being initialized, for state that needs to
    /// address itself later.
    pub fn actor_ref(&self) -> ActorRef<B> {
        ActorRef::new(self.sender.clone())
    }
}

/// Start an actor: run `init`, then hand the state to the message loop on a
/// fresh tokio task, and return the published handle.
///
/// Returns as soon as `init` completes; the loop owns the state thereafter.
/// An `init` error aborts the start and is returned to the creator — no task
/// is spawned.
pub async fn spawn<B: ActorBehavior>(args: B::Args) -> Result<ActorRef<B>, B::Error> {
    let (sender, receiver) = mpsc::channel(MAILBOX_CAPACITY);
    let ctx = InitContext {
        sender: sender.clone(),
    };
    let state = B::init(args, &ctx).await?;
    tokio::spawn(run_loop(state, receiver));
    Ok(ActorRef::new(sender))
}

/// The message loop: dequeue the oldest envelope, dispatch to the matching
/// handler, adopt the new state implicitly through `&mut self`.
///
/// A handler error is a fault, not a value: it is logged and the actor
/// terminates on the spot, without replying. Pending and future callers see
/// [`ActorError::ActorDropped`] / [`ActorError::ActorClosed`] rather than a
/// silently wrong answer. Replies into channels the caller abandoned are
/// discarded.
async fn run_loop<B: ActorBehavior>(mut state: B, mut receiver: mpsc::Receiver<Envelope<B>>) {
    let actor = std::any::type_name::<B>().split("::").last().unwrap_or("?");
    info!(actor, "Actor started");

    while let Some(envelope) = receiver.recv().await {
        match envelope {
            Envelope::Call {
                request,
                respond_to,
            } => {
                debug!(actor, ?request, "Call");
                match state.handle_call(request).await {
                    Ok(reply) => {
                        // Err here means the caller timed out or went away.
                        let _ = respond_to.send(reply);
                    }
                    Err(e) => {
                        error!(actor, error = %e, "Call handler faulted, terminating");
                        return;
                    }
                }
            }
            Envelope::Cast { request } => {
                debug!(actor, ?request, "Cast");
                if let Err(e) = state.handle_cast(request).await {
                    error!(actor, error = %e, "Cast handler faulted, terminating");
                    return;
                }
            }
        }
    }

    info!(actor, "Actor stopped");
}
