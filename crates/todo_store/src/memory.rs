//! In-memory todo store implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use entities::Todo;
use tokio::sync::RwLock;

use crate::{TodoStore, TodoStoreError, TodoStoreResult, TodoUpdate, SEED_TODOS};

#[derive(Debug)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// In-memory todo store backed by an ordered map.
///
/// Ids are assigned from a monotonically increasing counter and never reused
/// within the lifetime of the store.
#[derive(Debug)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store pre-populated with the demo records.
    pub fn seeded() -> Self {
        let mut todos = BTreeMap::new();
        for (offset, (task, completed)) in SEED_TODOS.iter().enumerate() {
            let id = offset as i64 + 1;
            let mut todo = Todo::new(id, *task);
            todo.completed = *completed;
            todos.insert(id, todo);
        }
        Self {
            inner: RwLock::new(Inner {
                todos,
                next_id: SEED_TODOS.len() as i64 + 1,
            }),
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> TodoStoreResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn create(&self, task: &str) -> TodoStoreResult<Todo> {
        if task.trim().is_empty() {
            return Err(TodoStoreError::EmptyTask);
        }
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let todo = Todo::new(id, task);
        inner.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, update: TodoUpdate) -> TodoStoreResult<Todo> {
        if update.task.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(TodoStoreError::EmptyTask);
        }
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .get_mut(&id)
            .ok_or_else(|| TodoStoreError::not_found(id))?;
        if let Some(task) = update.task {
            todo.task = task;
        }
        if let Some(completed) = update.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    async fn delete(&self, id: i64) -> TodoStoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.todos.remove(&id).is_none() {
            return Err(TodoStoreError::not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> TodoStoreResult<()> {
        Ok(())
    }

    fn has_database(&self) -> bool {
        false
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list() {
        let store = MemoryTodoStore::new();

        let first = store.create("Write docs").await.unwrap();
        let second = store.create("Review PR").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
        assert!(first.created_at.is_none());

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].task, "Write docs");
        assert_eq!(todos[1].task, "Review PR");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_task() {
        let store = MemoryTodoStore::new();
        assert!(matches!(
            store.create("").await,
            Err(TodoStoreError::EmptyTask)
        ));
        assert!(matches!(
            store.create("   ").await,
            Err(TodoStoreError::EmptyTask)
        ));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = MemoryTodoStore::new();
        let todo = store.create("Walk dog").await.unwrap();

        let updated = store
            .update(
                todo.id,
                TodoUpdate {
                    task: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.task, "Walk dog");
        assert!(updated.completed);

        let updated = store
            .update(
                todo.id,
                TodoUpdate {
                    task: Some("Walk cat".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.task, "Walk cat");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_with_no_fields_returns_record_unchanged() {
        let store = MemoryTodoStore::new();
        let todo = store.create("Keep me").await.unwrap();

        let same = store.update(todo.id, TodoUpdate::default()).await.unwrap();
        assert_eq!(same.task, "Keep me");
        assert!(!same.completed);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_task() {
        let store = MemoryTodoStore::new();
        let todo = store.create("Valid").await.unwrap();

        let err = store
            .update(
                todo.id,
                TodoUpdate {
                    task: Some("  ".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoStoreError::EmptyTask));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryTodoStore::new();
        let err = store
            .update(
                99999,
                TodoUpdate {
                    task: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoStoreError::NotFound { id: 99999 }));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryTodoStore::new();
        let todo = store.create("Remove me").await.unwrap();

        store.delete(todo.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            store.delete(todo.id).await,
            Err(TodoStoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryTodoStore::new();
        let first = store.create("One").await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create("Two").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = MemoryTodoStore::seeded();

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].task, "Setup CI/CD Pipeline");
        assert!(todos[0].completed);
        assert!(todos[1].completed);
        assert!(!todos[2].completed);

        // Seed ids are reserved; the next create continues after them.
        let next = store.create("Fourth").await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_ping_always_succeeds() {
        let store = MemoryTodoStore::new();
        store.ping().await.unwrap();
        assert!(!store.has_database());
    }
}
