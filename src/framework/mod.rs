//! Generic actor runtime.
//!
//! The building blocks every actor role in this crate is made of: the
//! [`ActorBehavior`] contract, the [`spawn`] function that turns a behavior
//! into a running message loop, and the [`ActorRef`] handle for talking to it.
//!
//! # Main Components
//!
//! - [`ActorBehavior`] - Trait each actor role implements (init / call / cast)
//! - [`spawn`] - Starts a behavior on its own task and returns its handle
//! - [`ActorRef`] - Cloneable handle: `call` with deadline, fire-and-forget `cast`
//! - [`ActorError`] - Transport-level outcomes callers must handle
//!
//! # Testing
//!
//! See [`mock`] for a scriptable endpoint to test clients and message
//! protocols without spawning real collaborators.

pub mod actor;
pub mod behavior;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;

pub use actor::{spawn, InitContext};
pub use behavior::ActorBehavior;
pub use error::ActorError;
pub use handle::{ActorRef, DEFAULT_CALL_TIMEOUT};
pub use message::{Envelope, ReplyTo};
pub use mock::{CallResponder, MockActor, MockMessage};
