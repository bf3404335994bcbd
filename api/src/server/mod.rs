//! API Server Module
//!
//! This module contains the server setup functionality for the API system.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{
    create_file, delete_file, get_file_content, get_folder_stats, get_root_stats, health_check,
    replace_file_content, ApiState,
};
use crate::models::ApiConfig;

/// Main API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Shared state
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiConfig, state: ApiState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Build the application router with the shared state
    pub fn router(&self) -> Router {
        Router::new()
            // File operations
            .route(
                "/api/files/*path",
                get(get_file_content)
                    .post(create_file)
                    .put(replace_file_content)
                    .delete(delete_file),
            )
            // Folder statistics
            .route("/api/folder-stats", get(get_root_stats))
            .route("/api/folder-stats/*path", get(get_folder_stats))
            // Health check
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the API server, running until the process is stopped
    pub async fn start(&self) -> Result<()> {
        self.start_with_shutdown(std::future::pending::<()>()).await
    }

    /// Start the API server, stopping gracefully once `shutdown` resolves
    pub async fn start_with_shutdown<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.bind_address();
        info!(
            "Starting TextVault API server on {} (root: {})",
            addr,
            self.state.sandbox.root().display()
        );

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("TextVault API server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start API server: {}", e))?;

        info!("TextVault API server stopped");
        Ok(())
    }
}
