//! CLI module
//!
//! Provides:
//! - Argument parsing and config overrides
//! - Logging initialization
//! - Root directory bootstrap

pub mod args;
pub mod bootstrap;
pub mod logging;

// Re-exports
pub use args::{parse_args, Args};
pub use bootstrap::ensure_root;
pub use logging::{init_logging, LogGuard};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error("Root directory error: {0}")]
    Root(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes (deterministic)
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_STARTUP_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
