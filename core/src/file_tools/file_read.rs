//! file_read: Read entire file into memory
//!
//! Reads file as UTF-8 string. Directories do not count as files.

use std::fs;

use crate::error::{FileError, Result};
use crate::sandbox::Sandbox;

/// Read entire file into a UTF-8 string
///
/// A path ending in `/` never names a file.
///
/// # Returns
/// * `Ok(String)` - File contents
/// * `Err(FileError::NotFound)` - No regular file at the path
/// * `Err(FileError::Io)` - Unreadable or not valid UTF-8
pub fn file_read(sandbox: &Sandbox, relative: &str) -> Result<String> {
    let path = sandbox.resolve(relative)?;
    if relative.ends_with('/') || !path.is_file() {
        return Err(FileError::NotFound("File not found.".to_string()));
    }

    let content = fs::read_to_string(&path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read file");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("test_file1"), "test test test").unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();

        assert_eq!(file_read(&sandbox, "test_file1").unwrap(), "test test test");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();

        let err = file_read(&sandbox, "missing.txt").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("folder")).unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();

        let err = file_read(&sandbox, "folder").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_read_trailing_separator_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("test_file1"), "test test test").unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();

        let err = file_read(&sandbox, "test_file1/").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_read_invalid_utf8_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("binary"), [0xff, 0xfe, 0x00]).unwrap();
        let sandbox = Sandbox::new(temp_dir.path()).unwrap();

        let err = file_read(&sandbox, "binary").unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }
}
