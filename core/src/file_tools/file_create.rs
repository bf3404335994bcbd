//! file_create: Create file if not exists
//!
//! Creates file and parent directories if needed.
//! Fails if file already exists (no overwrite).

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{FileError, Result};
use crate::sandbox::Sandbox;

/// Create a new file with content
///
/// # Arguments
/// * `sandbox` - Root the path is resolved under
/// * `relative` - Caller-supplied path; must not end with `/`
/// * `content` - Content to write (UTF-8)
///
/// # Returns
/// * `Ok(PathBuf)` - Resolved path of the new file
/// * `Err(FileError::InvalidPath)` - Path names a directory or leaves the root
/// * `Err(FileError::Conflict)` - Something already exists at the path
pub fn file_create(sandbox: &Sandbox, relative: &str, content: &str) -> Result<PathBuf> {
    if relative.is_empty() || relative.ends_with('/') {
        return Err(FileError::InvalidPath(
            "Path must end with file not directory.".to_string(),
        ));
    }

    let path = sandbox.resolve(relative)?;
    if path.exists() {
        return Err(FileError::Conflict("File already exists.".to_string()));
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // create_new narrows the exists/create window to the open(2) call
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => FileError::Conflict("File already exists.".to_string()),
            _ => FileError::Io(e),
        })?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Created file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sandbox() -> (TempDir, Sandbox) {
        let temp_dir = TempDir::new().unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();
        (temp_dir, sandbox)
    }

    #[test]
    fn test_create_writes_content() {
        let (_temp, sandbox) = sandbox();

        let path = file_create(&sandbox, "notes.txt", "hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_create_makes_parent_directories() {
        let (_temp, sandbox) = sandbox();

        let path = file_create(&sandbox, "a/b/c.txt", "nested").unwrap();
        assert!(sandbox.root().join("a/b").is_dir());
        assert_eq!(fs::read_to_string(path).unwrap(), "nested");
    }

    #[test]
    fn test_create_twice_conflicts() {
        let (_temp, sandbox) = sandbox();

        file_create(&sandbox, "once.txt", "first").unwrap();
        let err = file_create(&sandbox, "once.txt", "second").unwrap_err();
        assert!(matches!(err, FileError::Conflict(_)));

        let content = fs::read_to_string(sandbox.root().join("once.txt")).unwrap();
        assert_eq!(content, "first");
    }

    #[test]
    fn test_create_over_directory_conflicts() {
        let (_temp, sandbox) = sandbox();
        fs::create_dir(sandbox.root().join("dir")).unwrap();

        let err = file_create(&sandbox, "dir", "x").unwrap_err();
        assert!(matches!(err, FileError::Conflict(_)));
    }

    #[test]
    fn test_trailing_separator_rejected() {
        let (_temp, sandbox) = sandbox();

        let err = file_create(&sandbox, "folder/", "x").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));
        assert!(!sandbox.root().join("folder").exists());
    }

    #[test]
    fn test_escape_rejected() {
        let (_temp, sandbox) = sandbox();

        let err = file_create(&sandbox, "../escaped.txt", "x").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));
    }
}
