use crate::framework::ActorRef;
use crate::list_actor::{ListCall, ListCast, ListError, TodoListServer};
use crate::model::{TodoCreate, TodoEntry, TodoUpdate};
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for one list server, as handed out by the registry.
///
/// Mutations are casts: they resolve when enqueued and are applied in
/// issue order. `entries` is a call and therefore queues behind every
/// mutation this client issued before it — a read always reflects the
/// caller's own earlier writes.
#[derive(Clone, Debug)]
pub struct ListClient {
    name: String,
    inner: ActorRef<TodoListServer>,
}

impl ListClient {
    pub(crate) fn new(name: String, inner: ActorRef<TodoListServer>) -> Self {
        Self { name, inner }
    }

    /// The list name this client resolves to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether two clients talk to the same list server.
    pub fn same_actor(&self, other: &ListClient) -> bool {
        self.inner.same_actor(&other.inner)
    }

    /// Append a new entry; its id is assigned by the list.
    #[instrument(skip(self))]
    pub async fn add(&self, create: TodoCreate) -> Result<(), ListError> {
        debug!("Sending request");
        self.inner.cast(ListCast::Add(create)).await?;
        Ok(())
    }

    /// Patch entry `id`; unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn update(&self, id: u64, patch: TodoUpdate) -> Result<(), ListError> {
        debug!("Sending request");
        self.inner.cast(ListCast::Update { id, patch }).await?;
        Ok(())
    }

    /// Remove entry `id`; unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<(), ListError> {
        debug!("Sending request");
        self.inner.cast(ListCast::Delete { id }).await?;
        Ok(())
    }

    /// Entries scheduled on `date`, in insertion order, read from the
    /// latest persisted state.
    #[instrument(skip(self))]
    pub async fn entries(&self, date: NaiveDate) -> Result<Vec<TodoEntry>, ListError> {
        debug!("Sending request");
        Ok(self.inner.call(ListCall::Entries { date }).await?)
    }
}
