//! folder_stats tool: Directory text statistics
//!
//! Usage:
//! - Get statistics for every file below a directory (recursive)
//!
//! Returns:
//! - number_of_files: Total number of files
//! - avg_alphanumeric_chars / _std: word characters per file
//! - avg_word_length / _std: over every word of every file
//! - total_bytes: Total size in bytes
//!
//! Symbolic links are not followed. Files that are not valid UTF-8 are
//! decoded lossily for scanning; their size still counts in full.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::moments::Moments;
use super::text_scan::scan_text;
use crate::error::{FileError, Result};
use crate::sandbox::Sandbox;

/// Result from folder_stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderStats {
    /// Number of files found
    pub number_of_files: usize,
    /// Mean alphanumeric characters per file
    pub avg_alphanumeric_chars: f64,
    /// Population standard deviation of alphanumeric characters per file
    pub avg_alphanumeric_chars_std: f64,
    /// Mean word length across all files
    pub avg_word_length: f64,
    /// Population standard deviation of word length across all files
    pub avg_word_length_std: f64,
    /// Total bytes
    pub total_bytes: u64,
}

/// Accumulated totals while walking a tree
#[derive(Debug, Default)]
struct Totals {
    file_count: usize,
    total_bytes: u64,
    chars_per_file: Moments,
    word_lengths: Moments,
}

/// Compute statistics for the directory at `relative`
///
/// Computed fresh on every call; nothing is cached.
pub fn folder_stats(sandbox: &Sandbox, relative: &str) -> Result<FolderStats> {
    let root = sandbox.resolve(relative)?;
    if !root.is_dir() {
        return Err(FileError::NotFound("Directory not found.".to_string()));
    }

    let mut totals = Totals::default();
    walk_dir(&root, &mut totals)?;

    tracing::debug!(
        path = %root.display(),
        files = totals.file_count,
        bytes = totals.total_bytes,
        "Computed folder stats"
    );

    Ok(FolderStats {
        number_of_files: totals.file_count,
        avg_alphanumeric_chars: totals.chars_per_file.mean(),
        avg_alphanumeric_chars_std: totals.chars_per_file.std_dev(),
        avg_word_length: totals.word_lengths.mean(),
        avg_word_length_std: totals.word_lengths.std_dev(),
        total_bytes: totals.total_bytes,
    })
}

/// Walk directory tree recursively
fn walk_dir(path: &Path, totals: &mut Totals) -> Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_file() {
            let entry_path = entry.path();
            let bytes = fs::read(&entry_path)?;
            let scan = scan_text(&String::from_utf8_lossy(&bytes));

            totals.file_count += 1;
            totals.total_bytes += entry.metadata()?.len();
            totals.chars_per_file.push(scan.alphanumeric_chars);
            totals.word_lengths.extend(scan.word_lengths);
        } else if file_type.is_dir() {
            walk_dir(&entry.path(), totals)?;
        }
    }

    Ok(())
}
