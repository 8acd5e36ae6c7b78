//! Core entity definitions for the todo service.

mod todo;

pub use todo::*;
