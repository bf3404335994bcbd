//! file_delete: Remove a file or an empty directory
//!
//! Directory removal is non-recursive: a directory with contents fails.

use std::fs;
use std::path::PathBuf;

use crate::error::{FileError, Result};
use crate::sandbox::Sandbox;

/// What a successful delete removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deleted {
    File(PathBuf),
    Directory(PathBuf),
}

/// Delete the file or empty directory at `relative`
///
/// A trailing `/` only matches a directory.
///
/// # Returns
/// * `Ok(Deleted)` - What was removed
/// * `Err(FileError::NotFound)` - Neither a file nor a directory
/// * `Err(FileError::InvalidPath)` - Path is the root itself
/// * `Err(FileError::Io)` - Directory not empty, or removal failed
pub fn file_delete(sandbox: &Sandbox, relative: &str) -> Result<Deleted> {
    let path = sandbox.resolve(relative)?;
    let names_dir = relative.ends_with('/');

    if path.is_file() && !names_dir {
        fs::remove_file(&path)?;
        tracing::debug!(path = %path.display(), "Deleted file");
        Ok(Deleted::File(path))
    } else if path.is_dir() {
        if sandbox.is_root(&path) {
            return Err(FileError::InvalidPath(
                "The root directory cannot be deleted.".to_string(),
            ));
        }
        fs::remove_dir(&path)?;
        tracing::debug!(path = %path.display(), "Deleted directory");
        Ok(Deleted::Directory(path))
    } else {
        Err(FileError::NotFound("File does not exist.".to_string()))
    }
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
    fn test_delete_file() {
        let (_temp, sandbox) = sandbox();
        fs::write(sandbox.root().join("test_file3"), "bye").unwrap();

        let deleted = file_delete(&sandbox, "test_file3").unwrap();
        assert!(matches!(deleted, Deleted::File(_)));
        assert!(!sandbox.root().join("test_file3").exists());
    }

    #[test]
    fn test_delete_empty_directory() {
        let (_temp, sandbox) = sandbox();
        fs::create_dir(sandbox.root().join("empty")).unwrap();

        let deleted = file_delete(&sandbox, "empty").unwrap();
        assert!(matches!(deleted, Deleted::Directory(_)));
        assert!(!sandbox.root().join("empty").exists());
    }

    #[test]
    fn test_delete_non_empty_directory_fails() {
        let (_temp, sandbox) = sandbox();
        fs::create_dir(sandbox.root().join("full")).unwrap();
        fs::write(sandbox.root().join("full/keep.txt"), "keep").unwrap();

        let err = file_delete(&sandbox, "full").unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
        assert!(sandbox.root().join("full/keep.txt").is_file());
    }

    #[test]
    fn test_delete_trailing_separator_spares_file() {
        let (_temp, sandbox) = sandbox();
        fs::write(sandbox.root().join("test_file1"), "stay").unwrap();

        let err = file_delete(&sandbox, "test_file1/").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
        assert!(sandbox.root().join("test_file1").is_file());
    }

    #[test]
    fn test_delete_directory_with_trailing_separator() {
        let (_temp, sandbox) = sandbox();
        fs::create_dir(sandbox.root().join("empty")).unwrap();

        let deleted = file_delete(&sandbox, "empty/").unwrap();
        assert!(matches!(deleted, Deleted::Directory(_)));
    }

    #[test]
    fn test_delete_missing() {
        let (_temp, sandbox) = sandbox();

        let err = file_delete(&sandbox, "nothing").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_delete_root_refused() {
        let (_temp, sandbox) = sandbox();

        let err = file_delete(&sandbox, "").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));
        assert!(sandbox.root().is_dir());
    }
}
