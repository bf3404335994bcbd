//! TextVault: sandboxed text file service
//!
//! The binary wires configuration, logging and the root directory bootstrap
//! around the HTTP server from `textvault-api`.

pub mod cli;

pub use cli::{ensure_root, init_logging, parse_args, Args};
