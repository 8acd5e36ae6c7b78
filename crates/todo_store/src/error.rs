//! Todo store error types.

use thiserror::Error;

/// Errors that can occur during todo store operations.
#[derive(Debug, Error)]
pub enum TodoStoreError {
    /// Create or update was given an empty task.
    #[error("Task is required")]
    EmptyTask,

    /// Update carried no fields to apply.
    #[error("No fields to update")]
    NoFields,

    /// Todo not found.
    #[error("Todo not found: {id}")]
    NotFound { id: i64 },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TodoStoreError {
    /// Creates a not found error.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;
