use crate::framework::ActorRef;
use crate::model::TodoList;
use crate::storage::{RouterCall, RouterCast, RouterReply, ShardWorker, StorageError, StorageRouter};
use tracing::{debug, instrument};

/// Client for the storage router.
///
/// `store` is fire-and-forget; `fetch` and `route_for` are synchronous
/// calls. Per-key ordering holds for any single holder of this client: its
/// stores and fetches for one key travel the same router-to-worker path in
/// issue order.
#[derive(Clone, Debug)]
pub struct StorageClient {
    inner: ActorRef<StorageRouter>,
}

impl StorageClient {
    pub fn new(inner: ActorRef<StorageRouter>) -> Self {
        Self { inner }
    }

    /// Persist `list` under `name`. Resolves once the request is enqueued;
    /// last write wins per key.
    #[instrument(skip(self, list))]
    pub async fn store(&self, name: &str, list: TodoList) -> Result<(), StorageError> {
        debug!("Sending request");
        self.inner
            .cast(RouterCast::Store {
                name: name.to_owned(),
                list,
            })
            .await?;
        Ok(())
    }

    /// Latest persisted list under `name`, or `None` if nothing was ever
    /// stored.
    #[instrument(skip(self))]
    pub async fn fetch(&self, name: &str) -> Result<Option<TodoList>, StorageError> {
        debug!("Sending request");
        match self
            .inner
            .call(RouterCall::Fetch {
                name: name.to_owned(),
            })
            .await?
        {
            RouterReply::Fetched(list) => Ok(list),
            RouterReply::Routed { .. } => Err(StorageError::UnexpectedReply),
        }
    }

    /// Shard index and worker handle `name` is routed to. Deterministic for
    /// the router's lifetime.
    #[instrument(skip(self))]
    pub async fn route_for(&self, name: &str) -> Result<(usize, ActorRef<ShardWorker>), StorageError> {
        debug!("Sending request");
        match self
            .inner
            .call(RouterCall::RouteFor {
                name: name.to_owned(),
            })
            .await?
        {
            RouterReply::Routed { shard, worker } => Ok((shard, worker)),
            RouterReply::Fetched(_) => Err(StorageError::UnexpectedReply),
        }
    }
}
