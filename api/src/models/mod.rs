//! API Models Module
//!
//! Request/response shapes and server configuration.

use serde::{Deserialize, Serialize};
use textvault_core::ServerSettings;

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ApiConfig {
    /// `host:port` string handed to the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&ServerSettings> for ApiConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
        }
    }
}

/// Body of a successful file read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContentResponse {
    pub content: String,
}

/// Body of the health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
