//! Configuration Management Module
//!
//! Layered service configuration:
//! 1. Built-in defaults
//! 2. Optional config file (`textvault.toml`, or an explicit path)
//! 3. Environment variables, `TEXTVAULT__SECTION__KEY`
//!
//! Command-line overrides are applied by the binary on top of the result.

use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TEXTVAULT";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_NAME: &str = "textvault";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub content: ContentSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Where text files live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    pub root_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("static/text_files/"),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Also write daily-rolling log files into this directory
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

/// Filler text used when a request carries no body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentSettings {
    pub filler_paragraphs: usize,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            filler_paragraphs: 3,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `textvault.toml` in the
    /// working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: ServiceConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;

        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(text).context("Invalid TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be non-zero"));
        }
        if self.storage.root_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.root_dir must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(anyhow!(
                "Unsupported log level: {} (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
        if self.content.filler_paragraphs == 0 {
            return Err(anyhow!("content.filler_paragraphs must be at least 1"));
        }
        Ok(())
    }
}
