//! Todo API server binary.

use std::net::SocketAddr;

use todo_server::config::{Config, StoreBackend};
use todo_server::{create_app, create_state, init_tracing};
use todo_store::{MemoryTodoStore, PgTodoStore, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(store = ?config.store, "Starting Todo API server");

    match config.store {
        StoreBackend::Memory => serve(config, MemoryTodoStore::seeded()).await,
        StoreBackend::Postgres => {
            let store = PgTodoStore::connect(&config.postgres_url())?;
            // A failed initialization is not fatal: the process stays up and
            // the health endpoint reports the degraded state.
            if let Err(err) = store.initialize().await {
                tracing::warn!(error = %err, "Database initialization failed");
            }
            serve(config, store).await
        }
    }
}

async fn serve<S: TodoStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let state = create_state(config.clone(), store);
    let app = create_app(state.clone());

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server, draining in-flight requests on SIGINT/SIGTERM
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
