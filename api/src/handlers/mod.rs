//! API Handlers Module
//!
//! This module contains the request handlers for the API system. Handlers
//! are thin: they pick the content, hand the filesystem work to the
//! blocking pool and turn the outcome into a response.

use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use textvault_core::{
    file_create, file_delete, file_read, file_replace, folder_stats, ContentSource, Deleted,
    FolderStats, Sandbox,
};

use crate::error::ApiError;
use crate::models::{FileContentResponse, HealthResponse};

/// Represents the state of the API server
pub struct ApiState {
    /// Root every request path is resolved under
    pub sandbox: Sandbox,
    /// Text used when a create/replace request has an empty body
    pub filler: Arc<dyn ContentSource>,
}

impl ApiState {
    pub fn new(sandbox: Sandbox, filler: Arc<dyn ContentSource>) -> Self {
        Self { sandbox, filler }
    }

    /// Request body if present, generated filler otherwise
    fn content_for(&self, body: String) -> String {
        if body.is_empty() {
            self.filler.generate()
        } else {
            body
        }
    }
}

/// Run blocking filesystem work off the async reactor
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> textvault_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(task).await??)
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "textvault".to_string(),
    })
}

/// Create a text file
#[debug_handler]
pub async fn create_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
    body: String,
) -> Result<(StatusCode, String), ApiError> {
    tracing::debug!("Creating file: {}", path);

    let created = run_blocking(move || {
        let content = state.content_for(body);
        file_create(&state.sandbox, &path, &content)
    })
    .await?;

    tracing::info!(path = %created.display(), "File created");
    Ok((
        StatusCode::CREATED,
        format!("File created at {}.", created.display()),
    ))
}

/// Get the content of a text file
#[debug_handler]
pub async fn get_file_content(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<FileContentResponse>, ApiError> {
    tracing::debug!("Getting file: {}", path);

    let content = run_blocking(move || file_read(&state.sandbox, &path)).await?;
    Ok(Json(FileContentResponse { content }))
}

/// Replace the content of an existing text file
#[debug_handler]
pub async fn replace_file_content(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
    body: String,
) -> Result<(StatusCode, String), ApiError> {
    tracing::debug!("Replacing file: {}", path);

    let replaced = run_blocking(move || {
        let content = state.content_for(body);
        file_replace(&state.sandbox, &path, &content)
    })
    .await?;

    tracing::info!(path = %replaced.display(), "File replaced");
    Ok((
        StatusCode::OK,
        format!("File contents at {} changed.", replaced.display()),
    ))
}

/// Delete a file or an empty directory
#[debug_handler]
pub async fn delete_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<(StatusCode, String), ApiError> {
    tracing::debug!("Deleting: {}", path);

    let message = match run_blocking(move || file_delete(&state.sandbox, &path)).await? {
        Deleted::File(path) => format!("File contents at {} deleted.", path.display()),
        Deleted::Directory(path) => format!("Directory at {} deleted.", path.display()),
    };

    tracing::info!("{}", message);
    Ok((StatusCode::OK, message))
}

/// Statistics for a directory below the root
#[debug_handler]
pub async fn get_folder_stats(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<FolderStats>, ApiError> {
    tracing::debug!("Folder stats: {}", path);

    let stats = run_blocking(move || folder_stats(&state.sandbox, &path)).await?;
    Ok(Json(stats))
}

/// Statistics for the whole root
#[debug_handler]
pub async fn get_root_stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<FolderStats>, ApiError> {
    tracing::debug!("Folder stats: <root>");

    let stats = run_blocking(move || folder_stats(&state.sandbox, "")).await?;
    Ok(Json(stats))
}
