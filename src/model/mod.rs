//! Pure domain data: the immutable to-do container and its DTOs.

pub mod todo;

pub use todo::*;
