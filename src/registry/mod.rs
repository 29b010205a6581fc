//! Lazy per-name registry of list servers.

pub mod error;
pub mod server;

pub use error::RegistryError;
pub use server::{ListRegistry, RegistryArgs, RegistryCall, RegistryCast, RegistryReply};
