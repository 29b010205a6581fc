//! Per-list entity actor: holds one list's state, hydrates itself from the
//! storage tier on first use, persists every mutation back to it.

pub mod error;
pub mod server;

pub use error::ListError;
pub use server::{ListArgs, ListCall, ListCast, TodoListServer};
