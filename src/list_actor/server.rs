//! # Per-List Server
//!
//! One `TodoListServer` actor per logical list name. The server holds the
//! list's current immutable state, mirrors every mutation to the storage
//! tier, and answers reads from the latest persisted state.
//!
//! # Architecture Note
//! Creation must not block the registry on storage I/O, so hydration is
//! asynchronous self-initialization: `init` enqueues a private `Hydrate`
//! cast into its own still-unpublished mailbox and returns at once. By the
//! time anyone else can enqueue a message, `Hydrate` is already ahead of it
//! in the FIFO queue — the load from disk is guaranteed to be the first
//! message processed, as a property of the creation protocol rather than of
//! timing.

use crate::clients::StorageClient;
use crate::framework::{ActorBehavior, InitContext};
use crate::list_actor::error::ListError;
use crate::model::{TodoCreate, TodoEntry, TodoList, TodoUpdate};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Synchronous requests handled by a list server.
#[derive(Debug)]
pub enum ListCall {
    /// Entries scheduled on `date`, read from the latest persisted state.
    Entries { date: NaiveDate },
}

/// Fire-and-forget requests handled by a list server.
#[derive(Debug)]
pub enum ListCast {
    /// Priming message the server sends itself at creation; external code
    /// has no reason to send it.
    Hydrate,
    Add(TodoCreate),
    Update { id: u64, patch: TodoUpdate },
    Delete { id: u64 },
}

/// Startup arguments: the list's name and the storage tier to load from and
/// persist to.
#[derive(Debug)]
pub struct ListArgs {
    pub name: String,
    pub storage: StorageClient,
}

enum ListState {
    /// Between creation and the `Hydrate` message; no external message can
    /// be processed in this state.
    Hydrating,
    Ready(TodoList),
}

/// Actor owning the state of one to-do list.
pub struct TodoListServer {
    name: String,
    storage: StorageClient,
    state: ListState,
}

impl TodoListServer {
    /// Apply a pure transformation, issue its persistence, adopt the result.
    ///
    /// The store cast and the adoption happen in the same step: a mutation
    /// whose persistence was not at least issued is never observable.
    async fn apply(&mut self, op: impl FnOnce(&TodoList) -> TodoList) -> Result<(), ListError> {
        let current = match &self.state {
            ListState::Ready(list) => list,
            ListState::Hydrating => return Err(ListError::NotHydrated),
        };
        let next = op(current);
        self.storage.store(&self.name, next.clone()).await?;
        debug!(name = %self.name, entries = next.len(), "Mutation applied");
        self.state = ListState::Ready(next);
        Ok(())
    }
}

#[async_trait]
impl ActorBehavior for TodoListServer {
    type Args = ListArgs;
    type Call = ListCall;
    type Reply = Vec<TodoEntry>;
    type Cast = ListCast;
    type Error = ListError;

    async fn init(args: ListArgs, ctx: &InitContext<Self>) -> Result<Self, ListError> {
        // Queued before the handle leaves `spawn`, so it is processed ahead
        // of every external message.
        ctx.cast_to_self(ListCast::Hydrate)?;
        debug!(name = %args.name, "List server created, hydration queued");
        Ok(Self {
            name: args.name,
            storage: args.storage,
            state: ListState::Hydrating,
        })
    }

    async fn handle_call(&mut self, request: ListCall) -> Result<Vec<TodoEntry>, ListError> {
        match request {
            ListCall::Entries { date } => {
                if matches!(self.state, ListState::Hydrating) {
                    return Err(ListError::NotHydrated);
                }
                // Read from the persisted copy, not the held one: freshness
                // relative to the last successful persist beats latency here.
                let list = self.storage.fetch(&self.name).await?.unwrap_or_default();
                Ok(list.entries_on(date))
            }
        }
    }

    async fn handle_cast(&mut self, request: ListCast) -> Result<(), ListError> {
        match request {
            ListCast::Hydrate => {
                let list = self.storage.fetch(&self.name).await?.unwrap_or_default();
                info!(name = %self.name, entries = list.len(), "Hydrated");
                self.state = ListState::Ready(list);
                Ok(())
            }
            ListCast::Add(create) => self.apply(|list| list.add(create)).await,
            ListCast::Update { id, patch } => self.apply(|list| list.update(id, &patch)).await,
            ListCast::Delete { id } => self.apply(|list| list.delete(id)).await,
        }
    }
}
