//! Startup bootstrap
//!
//! Ensures the storage root exists before the server accepts requests.
//!
//! ## Behavior
//!
//! - Creates the root directory (and parents) if missing
//! - Fails if the path exists but is not a directory
//! - Returns a [`Sandbox`] anchored at the canonical root

use std::fs;
use std::path::Path;
use tracing::info;

use crate::cli::{Error, Result};
use textvault_core::Sandbox;

/// Ensure the root directory exists and open a sandbox on it
pub fn ensure_root(root: &Path) -> Result<Sandbox> {
    if root.exists() {
        if !root.is_dir() {
            return Err(Error::Root(format!(
                "'{}' exists but is not a directory",
                root.display()
            )));
        }
    } else {
        fs::create_dir_all(root)?;
        info!(root = %root.display(), "Created root directory");
    }

    Sandbox::new(root).map_err(|e| Error::Root(e.to_string()))
}
