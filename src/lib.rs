//! # Listkeeper
//!
//! > **Sharded, actor-based to-do storage with per-key ordering.**
//!
//! This crate pairs a small generic actor runtime with a layered application
//! built on it: a registry that lazily creates one actor per to-do list, and
//! a sharded persistence tier that guarantees per-key write/read ordering
//! while spreading unrelated keys across parallel workers.
//!
//! ## 🏗️ Design Philosophy
//!
//! Everything stateful is an actor: private state, a strictly FIFO mailbox,
//! one message at a time. There is not a single `Mutex` in this crate — each
//! ordering and deduplication guarantee is obtained by arranging *which
//! actor's mailbox* a message must pass through:
//!
//! - **Per-key write ordering**: every operation on a key is routed (by a
//!   deterministic hash) to the same shard worker, so that worker's mailbox
//!   serializes the key's reads and writes.
//! - **Duplicate-free lazy creation**: the registry is one actor, so two
//!   concurrent resolves of an unseen name are processed one after the
//!   other, and the second finds the first one's result in the map.
//! - **Non-blocking hydration**: a new list server enqueues a load-from-disk
//!   message to *itself* before its handle is published, so the expensive
//!   read happens on its own mailbox ahead of every external request,
//!   without the creator ever waiting on storage.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic runtime: the [`ActorBehavior`](framework::ActorBehavior)
//! contract (init / call / cast), [`spawn`](framework::spawn), and the
//! [`ActorRef`](framework::ActorRef) handle with call deadlines and
//! fire-and-forget casts. Role-agnostic; everything below implements it.
//!
//! ### 2. The Data ([`model`])
//! The immutable [`TodoList`](model::TodoList) container and its DTOs. Pure
//! transformations only — the actors own all the side effects.
//!
//! ### 3. The Persistence Tier ([`storage`])
//! A [`StorageRouter`](storage::StorageRouter) actor fronting a fixed pool
//! of [`ShardWorker`](storage::ShardWorker) actors, each exclusively owning
//! one shard directory of JSON files.
//!
//! ### 4. The Application Actors ([`registry`], [`list_actor`])
//! The lazy [`ListRegistry`](registry::ListRegistry) and the per-list
//! [`TodoListServer`](list_actor::TodoListServer) with its
//! hydrate-then-serve state machine.
//!
//! ### 5. The Interface ([`clients`])
//! Raw message enums stay inside the crate; callers get
//! [`RegistryClient`](clients::RegistryClient),
//! [`ListClient`](clients::ListClient), and
//! [`StorageClient`](clients::StorageClient) wrappers instead.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`TodoSystem`](lifecycle::TodoSystem) wires router, workers, and registry
//! together from a [`TodoConfig`](lifecycle::TodoConfig) and shuts the tree
//! down by channel closure.
//!
//! ## 🚀 Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use listkeeper::lifecycle::{TodoConfig, TodoSystem};
//! use listkeeper::model::TodoCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     listkeeper::lifecycle::setup_tracing();
//!
//!     let system = TodoSystem::start(TodoConfig::new("data")).await?;
//!
//!     let list = system.registry.resolve("groceries").await?;
//!     let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!     list.add(TodoCreate::new("Milk", date)).await?;
//!
//!     for entry in list.entries(date).await? {
//!         println!("#{} {}", entry.id, entry.title);
//!     }
//!
//!     system.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! In-process only: no distribution, no durability beyond last-write-wins
//! per key, no authentication, no network API. Callers with process
//! boundaries sit on top of the clients.

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod list_actor;
pub mod model;
pub mod registry;
pub mod storage;
