//! Sandbox: resolve caller-supplied paths under a fixed root
//!
//! Every filesystem operation goes through [`Sandbox::resolve`] first.
//! Resolution is two-step:
//! 1. Lexical normalization (`.` dropped, `..` pops, absolute parts rejected)
//! 2. The deepest existing ancestor is canonicalized and must live under the
//!    canonical root, so symlinks cannot lead outside of it

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{FileError, Result};

/// A root directory that all resolved paths are confined to
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    /// Open a sandbox on an existing directory
    ///
    /// The root is canonicalized once here; containment checks compare
    /// against this canonical form.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = fs::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(FileError::InvalidPath(format!(
                "Root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a relative, forward-slash separated path onto the filesystem
    ///
    /// An empty path resolves to the root itself. A leading `/` is ignored.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let mut normalized = PathBuf::new();

        for component in Path::new(relative.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(escape_error(relative));
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(escape_error(relative));
                }
            }
        }

        let candidate = self.root.join(&normalized);
        self.ensure_contained(&candidate, relative)?;
        Ok(candidate)
    }

    /// Whether `path` is the sandbox root
    pub fn is_root(&self, path: &Path) -> bool {
        path == self.root
    }

    fn ensure_contained(&self, candidate: &Path, relative: &str) -> Result<()> {
        // symlink_metadata so a dangling link counts as existing
        let mut probe = candidate;
        while probe.symlink_metadata().is_err() {
            match probe.parent() {
                Some(parent) => probe = parent,
                None => break,
            }
        }

        let canonical = fs::canonicalize(probe).map_err(|_| escape_error(relative))?;
        if !canonical.starts_with(&self.root) {
            tracing::warn!(path = relative, "Rejected path outside of root");
            return Err(escape_error(relative));
        }

        Ok(())
    }
}

fn escape_error(relative: &str) -> FileError {
    FileError::InvalidPath(format!("Path escapes the root directory: {}", relative))
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
    fn test_resolve_nested_path() {
        let (_temp, sandbox) = sandbox();

        let resolved = sandbox.resolve("a/b/c.txt").unwrap();
        assert_eq!(resolved, sandbox.root().join("a").join("b").join("c.txt"));
    }

    #[test]
    fn test_resolve_empty_is_root() {
        let (_temp, sandbox) = sandbox();

        let resolved = sandbox.resolve("").unwrap();
        assert!(sandbox.is_root(&resolved));
    }

    #[test]
    fn test_leading_slash_is_relative() {
        let (_temp, sandbox) = sandbox();

        let resolved = sandbox.resolve("/notes.txt").unwrap();
        assert_eq!(resolved, sandbox.root().join("notes.txt"));
    }

    #[test]
    fn test_parent_inside_root_is_allowed() {
        let (_temp, sandbox) = sandbox();

        let resolved = sandbox.resolve("a/../b.txt").unwrap();
        assert_eq!(resolved, sandbox.root().join("b.txt"));
    }

    #[test]
    fn test_parent_escape_rejected() {
        let (_temp, sandbox) = sandbox();

        let err = sandbox.resolve("../outside.txt").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));

        let err = sandbox.resolve("a/../../outside.txt").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_rejected() {
        let (_temp, sandbox) = sandbox();
        let outside = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), sandbox.root().join("link")).unwrap();

        let err = sandbox.resolve("link/secret.txt").unwrap_err();
        assert!(matches!(err, FileError::InvalidPath(_)));
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(Sandbox::new(&missing).is_err());
    }
}
