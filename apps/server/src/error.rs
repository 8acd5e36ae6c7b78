//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use todo_store::TodoStoreError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Storage error.
    #[error("Store error: {0}")]
    Store(#[from] TodoStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Store(TodoStoreError::EmptyTask) => {
                (StatusCode::BAD_REQUEST, "Task is required".to_string())
            }
            ServerError::Store(TodoStoreError::NoFields) => {
                (StatusCode::BAD_REQUEST, "No fields to update".to_string())
            }
            ServerError::Store(TodoStoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ServerError::Store(TodoStoreError::Database(e)) => {
                tracing::error!(error = %e, "Storage unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
