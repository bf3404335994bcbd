//! API Error Module
//!
//! Maps the core error taxonomy onto HTTP status codes. Every response body
//! is a plain-text, human-readable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use textvault_core::FileError;
use thiserror::Error;

/// Errors returned by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::File(FileError::InvalidPath(_)) => StatusCode::BAD_REQUEST,
            ApiError::File(FileError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::File(FileError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::File(FileError::Io(_)) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
