//! # List Registry
//!
//! One actor that maps list names to running list servers, creating them
//! lazily on first resolve.
//!
//! # Architecture Note
//! Deduplication under concurrent demand needs no lock: `Resolve` is a call
//! processed one at a time by the registry's own message loop, so of two
//! concurrent resolves for an unseen name, whichever is dequeued first
//! creates the server and the other finds it in the map. The map only grows;
//! eviction is somebody else's problem.

use crate::clients::{ListClient, StorageClient};
use crate::framework::{spawn, ActorBehavior, InitContext};
use crate::list_actor::{ListArgs, TodoListServer};
use crate::registry::error::RegistryError;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info};

/// Synchronous requests handled by the registry.
#[derive(Debug)]
pub enum RegistryCall {
    /// Handle for the list named `name`, creating its server if needed.
    Resolve { name: String },
    /// Number of list servers created so far.
    Len,
}

/// Replies to [`RegistryCall`].
#[derive(Debug)]
pub enum RegistryReply {
    Resolved(ListClient),
    Len(usize),
}

/// The registry accepts no casts; the empty enum makes that a compile-time
/// fact rather than a runtime fault.
#[derive(Debug)]
pub enum RegistryCast {}

/// Startup arguments: the storage tier injected into every list server.
#[derive(Debug)]
pub struct RegistryArgs {
    pub storage: StorageClient,
}

/// Actor owning the name-to-server map.
pub struct ListRegistry {
    storage: StorageClient,
    lists: HashMap<String, ListClient>,
}

#[async_trait]
impl ActorBehavior for ListRegistry {
    type Args = RegistryArgs;
    type Call = RegistryCall;
    type Reply = RegistryReply;
    type Cast = RegistryCast;
    type Error = RegistryError;

    async fn init(args: RegistryArgs, _ctx: &InitContext<Self>) -> Result<Self, RegistryError> {
        info!("Registry started");
        Ok(Self {
            storage: args.storage,
            lists: HashMap::new(),
        })
    }

    async fn handle_call(&mut self, request: RegistryCall) -> Result<RegistryReply, RegistryError> {
        match request {
            RegistryCall::Resolve { name } => {
                if let Some(client) = self.lists.get(&name) {
                    debug!(%name, "Resolve hit");
                    return Ok(RegistryReply::Resolved(client.clone()));
                }
                let server = spawn::<TodoListServer>(ListArgs {
                    name: name.clone(),
                    storage: self.storage.clone(),
                })
                .await?;
                let client = ListClient::new(name.clone(), server);
                self.lists.insert(name.clone(), client.clone());
                info!(%name, total = self.lists.len(), "List server created");
                Ok(RegistryReply::Resolved(client))
            }
            RegistryCall::Len => Ok(RegistryReply::Len(self.lists.len())),
        }
    }

    async fn handle_cast(&mut self, request: RegistryCast) -> Result<(), RegistryError> {
        match request {}
    }
}
