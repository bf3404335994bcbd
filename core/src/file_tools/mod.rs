//! File tools: text file operations under the sandbox root
//!
//! All operations use the REAL filesystem: no mocks, no in-memory FS.
//! Each one resolves its path through [`crate::Sandbox`] before touching disk.

mod file_create;
mod file_delete;
mod file_read;
mod file_replace;

pub use file_create::file_create;
pub use file_delete::{file_delete, Deleted};
pub use file_read::file_read;
pub use file_replace::file_replace;
