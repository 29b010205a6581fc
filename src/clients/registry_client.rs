use crate::clients::ListClient;
use crate::framework::ActorRef;
use crate::registry::{ListRegistry, RegistryCall, RegistryError, RegistryReply};
use tracing::{debug, instrument};

/// Client for the list registry.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    inner: ActorRef<ListRegistry>,
}

impl RegistryClient {
    pub fn new(inner: ActorRef<ListRegistry>) -> Self {
        Self { inner }
    }

    /// Client for the list named `name`, creating its server on first use.
    ///
    /// Concurrent resolves of the same unseen name all receive clients for
    /// the same, single server.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> Result<ListClient, RegistryError> {
        debug!("Sending request");
        match self
            .inner
            .call(RegistryCall::Resolve {
                name: name.to_owned(),
            })
            .await?
        {
            RegistryReply::Resolved(client) => Ok(client),
            RegistryReply::Len(_) => Err(RegistryError::UnexpectedReply),
        }
    }

    /// Number of list servers created so far.
    #[instrument(skip(self))]
    pub async fn len(&self) -> Result<usize, RegistryError> {
        debug!("Sending request");
        match self.inner.call(RegistryCall::Len).await? {
            RegistryReply::Len(n) => Ok(n),
            RegistryReply::Resolved(_) => Err(RegistryError::UnexpectedReply),
        }
    }
}
