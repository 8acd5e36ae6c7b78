//! Todo storage backends.
//!
//! This crate provides the storage abstraction behind the todo API. It ships
//! two interchangeable implementations of the [`TodoStore`] trait: an
//! in-memory store and a PostgreSQL-backed store.

mod error;
mod memory;
mod postgres;
mod traits;

pub use error::*;
pub use memory::*;
pub use postgres::*;
pub use traits::*;

/// Demo records installed into an empty store.
pub(crate) const SEED_TODOS: [(&str, bool); 3] = [
    ("Setup CI/CD Pipeline", true),
    ("Deploy to AWS", true),
    ("Deliver Amazing Presentation", false),
];
