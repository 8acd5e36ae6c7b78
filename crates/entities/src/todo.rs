//! Todo entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the store.
    pub id: i64,
    /// Task description.
    pub task: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When this record was created. Populated by the database-backed store
    /// only; omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new todo with the given id, not yet completed.
    pub fn new(id: i64, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            completed: false,
            created_at: None,
        }
    }
}
