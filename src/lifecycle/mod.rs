//! Runtime orchestration and lifecycle management.
//!
//! Wires the actors together in dependency order, owns shutdown, and sets up
//! observability.
//!
//! # Main Components
//!
//! - [`TodoSystem`] - Starts and wires the router, workers, and registry
//! - [`TodoConfig`] - Storage root and shard-pool size
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use system::{SystemError, TodoConfig, TodoSystem};
pub use tracing::setup_tracing;
