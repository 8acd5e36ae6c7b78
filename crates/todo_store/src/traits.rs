//! Todo store trait definitions.

use async_trait::async_trait;
use entities::Todo;
use serde::Deserialize;

use crate::TodoStoreResult;

/// Partial update for a todo. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoUpdate {
    /// New task description.
    pub task: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

impl TodoUpdate {
    /// Returns true when no fields are present.
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.completed.is_none()
    }
}

/// Trait for todo storage operations.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Lists all todos, ascending by id.
    async fn list(&self) -> TodoStoreResult<Vec<Todo>>;

    /// Creates a new todo with the next unique id and `completed` unset.
    async fn create(&self, task: &str) -> TodoStoreResult<Todo>;

    /// Applies the provided fields to an existing todo.
    async fn update(&self, id: i64, update: TodoUpdate) -> TodoStoreResult<Todo>;

    /// Deletes a todo permanently.
    async fn delete(&self, id: i64) -> TodoStoreResult<()>;

    /// Probes backing storage connectivity.
    async fn ping(&self) -> TodoStoreResult<()>;

    /// Whether this store is backed by an external database.
    fn has_database(&self) -> bool;

    /// Releases storage resources held by this store.
    async fn close(&self);
}
