//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, SessionBackend};
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database, MemorySessionStore, SessionStore};

/// Connect the configured session backend
async fn session_store(config: &Config) -> AppResult<Arc<dyn SessionStore>> {
    match config.session_backend {
        SessionBackend::Redis => {
            let cache = Cache::connect(config).await?;
            Ok(Arc::new(cache))
        }
        SessionBackend::Memory => {
            tracing::warn!("Using in-process session store; sessions are lost on restart");
            Ok(Arc::new(MemorySessionStore::new()))
        }
    }
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let db = Arc::new(Database::connect(&config).await?);
    tracing::info!("Database connected");

    let sessions = session_store(&config).await?;
    tracing::info!(backend = ?config.session_backend, "Session store ready");

    if !config.api_require_session {
        tracing::warn!("Employee JSON API is public; set API_REQUIRE_SESSION=true to guard it");
    }

    let app = create_router(AppState::from_config(db, sessions, &config));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
