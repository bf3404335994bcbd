//! TextVault server
//!
//! Startup order:
//! 1. Parse CLI arguments
//! 2. Load configuration (file → env → flags)
//! 3. Initialize logging
//! 4. Ensure the root directory exists
//! 5. Serve until Ctrl-C

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use textvault::cli::{self, Error, EXIT_FAILURE, EXIT_STARTUP_ERROR};
use textvault_api::{ApiConfig, ApiServer, ApiState};
use textvault_core::{LoremFiller, ServiceConfig};

#[tokio::main]
async fn main() {
    let args = match cli::parse_args(std::env::args()) {
        Ok(args) => args,
        // --help / --version and usage errors
        Err(Error::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_STARTUP_ERROR);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_STARTUP_ERROR);
        }
    };

    let _log_guard = match cli::init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_STARTUP_ERROR);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn load_config(args: &cli::Args) -> anyhow::Result<ServiceConfig> {
    let mut config = ServiceConfig::load(args.config.as_deref())?;
    args.apply_to(&mut config)?;
    Ok(config)
}

async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let sandbox = cli::ensure_root(&config.storage.root_dir).context("Bootstrap failed")?;
    info!(root = %sandbox.root().display(), "Root directory ready");

    let filler = Arc::new(LoremFiller::new(config.content.filler_paragraphs));
    let server = ApiServer::new(
        ApiConfig::from(&config.server),
        ApiState::new(sandbox, filler),
    );

    server.start_with_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
