//! CLI argument parsing
//!
//! Options override the loaded configuration:
//! --config, --root, --host, --port, --log-level, --log-json

use clap::Parser;
use std::path::PathBuf;

use crate::cli::{Error, Result};
use textvault_core::ServiceConfig;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "textvault", version, about = "Sandboxed text file service")]
pub struct Args {
    /// Configuration file (default: ./textvault.toml if present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory for stored text files
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Apply explicit flags on top of a loaded configuration
    pub fn apply_to(&self, config: &mut ServiceConfig) -> Result<()> {
        if let Some(root) = &self.root {
            config.storage.root_dir = root.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }

        config
            .validate()
            .map_err(|e| Error::InvalidArgs(e.to_string()))
    }
}

/// Parse CLI arguments
///
/// The first item is the program name, as with `std::env::args()`.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    Args::try_parse_from(args).map_err(Error::Clap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("textvault")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_empty_args() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed.config, None);
        assert_eq!(parsed.root, None);
        assert_eq!(parsed.port, None);
        assert!(!parsed.log_json);
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = parse_args(args(&[
            "--config",
            "svc.toml",
            "--root",
            "/srv/text",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-level",
            "debug",
            "--log-json",
        ]))
        .unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("svc.toml")));
        assert_eq!(parsed.root, Some(PathBuf::from("/srv/text")));
        assert_eq!(parsed.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(parsed.port, Some(9000));
        assert_eq!(parsed.log_level.as_deref(), Some("debug"));
        assert!(parsed.log_json);
    }

    #[test]
    fn test_parse_invalid_port() {
        assert!(parse_args(args(&["--port", "not-a-port"])).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let parsed = parse_args(args(&["--root", "data", "--port", "7000"])).unwrap();
        let mut config = ServiceConfig::default();

        parsed.apply_to(&mut config).unwrap();
        assert_eq!(config.storage.root_dir, PathBuf::from("data"));
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_apply_rejects_invalid_level() {
        let parsed = parse_args(args(&["--log-level", "chatty"])).unwrap();
        let mut config = ServiceConfig::default();

        let err = parsed.apply_to(&mut config).unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(_)));
    }
}
