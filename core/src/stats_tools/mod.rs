//! Stats tools: folder statistics over text files
//!
//! - text_scan: per-file alphanumeric count and word lengths
//! - moments: order-independent mean / population standard deviation
//! - folder_stats: recursive walk + reduction

mod folder_stats;
mod moments;
mod text_scan;

pub use folder_stats::{folder_stats, FolderStats};
pub use moments::Moments;
pub use text_scan::{scan_text, TextScan};
