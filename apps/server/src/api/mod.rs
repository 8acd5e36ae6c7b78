//! API endpoints.

pub mod health;
pub mod todo;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use todo_store::TodoStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TodoStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Todo endpoints
        .route("/api/todos", get(todo::list_todos).post(todo::create_todo))
        .route(
            "/api/todos/:id",
            put(todo::update_todo).delete(todo::delete_todo),
        )
        // Health check
        .route("/health", get(health::health_check))
}
