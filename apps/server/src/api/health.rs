//! Health check endpoint, used by the deployment pipeline.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use todo_store::TodoStore;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Database connectivity, reported by the database-backed variant only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    /// Time the check ran.
    pub timestamp: DateTime<Utc>,
    /// Probe failure detail, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reports liveness, probing storage connectivity for database-backed stores.
pub async fn health_check<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp = Utc::now();

    if !state.store.has_database() {
        return (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: None,
                timestamp,
                error: None,
            }),
        );
    }

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: Some("connected"),
                timestamp,
                error: None,
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed to reach storage");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: Some("disconnected"),
                    timestamp,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
