//! TextVault Core
//!
//! Filesystem substrate for the TextVault service: sandboxed path
//! resolution, text file operations, folder statistics, content
//! generation and layered configuration.
//!
//! All operations use the REAL filesystem under a single root directory.

pub mod config;
pub mod content;
pub mod error;
pub mod file_tools;
pub mod sandbox;
pub mod stats_tools;

pub use config::{ContentSettings, LoggingSettings, ServerSettings, ServiceConfig, StorageSettings};
pub use content::{ContentSource, FixedText, LoremFiller};
pub use error::{FileError, Result};
pub use file_tools::{file_create, file_delete, file_read, file_replace, Deleted};
pub use sandbox::Sandbox;
pub use stats_tools::{folder_stats, scan_text, FolderStats, Moments, TextScan};
