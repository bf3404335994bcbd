//! Logging initialization
//!
//! Console output is human-readable or JSON lines. When a log directory is
//! configured, JSON lines are also appended to a daily-rolling file through
//! a non-blocking writer. `RUST_LOG` takes precedence over the configured
//! level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::cli::{Error, Result};
use textvault_core::LoggingSettings;

/// Log file name prefix inside the log directory
const LOG_FILE_PREFIX: &str = "textvault.log";

/// Keeps the background log writer alive; drop flushes pending lines
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Build the level filter from `RUST_LOG`, falling back to `level`
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global subscriber
pub fn init_logging(settings: &LoggingSettings) -> Result<LogGuard> {
    let filter = build_filter(&settings.level)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console = fmt::layer::<Registry>().with_target(false);
    layers.push(if settings.json {
        console.json().boxed()
    } else {
        console.boxed()
    });

    let file_guard = match &settings.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(
                fmt::layer::<Registry>()
                    .with_ansi(false)
                    .with_writer(writer)
                    .json()
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(LogGuard { _file: file_guard })
}
