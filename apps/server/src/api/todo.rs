//! Todo CRUD endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::Todo;
use serde::Deserialize;
use todo_store::{TodoStore, TodoUpdate};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Task description.
    #[serde(default)]
    pub task: Option<String>,
}

/// Lists all todos, ascending by id.
pub async fn list_todos<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Todo>>> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// Creates a new todo.
pub async fn create_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateTodoRequest>,
) -> ServerResult<(StatusCode, Json<Todo>)> {
    let task = request
        .task
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("Task is required".to_string()))?;

    let todo = state.store.create(task).await?;

    tracing::info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Applies a partial update to a todo.
pub async fn update_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
    Json(update): Json<TodoUpdate>,
) -> ServerResult<Json<Todo>> {
    let todo = state.store.update(id, update).await?;

    tracing::info!(id, completed = todo.completed, "Todo updated");

    Ok(Json(todo))
}

/// Deletes a todo.
pub async fn delete_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> ServerResult<StatusCode> {
    state.store.delete(id).await?;

    tracing::info!(id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
