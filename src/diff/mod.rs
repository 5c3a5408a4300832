//! Line comparison and formatting module
//!
//! This module provides the line-level comparison engine and the text
//! formatters for its results. The engine aligns two texts on their longest
//! common subsequence of lines and annotates every line on each side.

pub mod engine;
pub mod formatter;

// Re-export the main types for easier use
pub use engine::{compare, DiffLine, DiffResult, DiffStats, LineKind};
pub use formatter::{DiffFormat, DiffFormatter};

/// Convenience function to compare two texts and render them side by side.
pub fn side_by_side<P: AsRef<std::path::Path>>(
    left_text: &str,
    right_text: &str,
    left_path: P,
    right_path: P,
    width: usize,
) -> String {
    let result = compare(left_text, right_text);
    DiffFormatter::format_side_by_side(&result, left_path, right_path, width, false)
}

/// Convenience function to get comparison statistics for two texts.
pub fn diff_stats(left_text: &str, right_text: &str) -> DiffStats {
    compare(left_text, right_text).stats()
}
