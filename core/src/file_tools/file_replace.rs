//! file_replace: Atomically overwrite an existing file with fsync
//!
//! Writes file atomically using write+rename pattern.
//! Fails if the file does not already exist.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use crate::error::{FileError, Result};
use crate::sandbox::Sandbox;

/// Replace the entire content of an existing file
///
/// Uses write+rename pattern for atomicity:
/// 1. Write to a uniquely named temp file in the same directory
/// 2. fsync to ensure data is on disk
/// 3. Rename over target (atomic on POSIX)
///
/// A path ending in `/` never names a file.
///
/// # Returns
/// * `Ok(PathBuf)` - Resolved path of the replaced file
/// * `Err(FileError::NotFound)` - No regular file at the path
pub fn file_replace(sandbox: &Sandbox, relative: &str, content: &str) -> Result<PathBuf> {
    let path = sandbox.resolve(relative)?;
    if relative.ends_with('/') || !path.is_file() {
        return Err(FileError::NotFound("File does not exist.".to_string()));
    }

    let parent = path.parent().unwrap_or_else(|| sandbox.root());

    // Dropping an unpersisted NamedTempFile removes it
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&path).map_err(|e| FileError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Replaced file");
    Ok(path)
}
