//! Export functionality for saving comparisons
//!
//! This module provides functionality to write a rendered comparison to a
//! file, optionally preceded by metadata and a change summary.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::diff::{DiffFormat, DiffFormatter, DiffResult};
use crate::error::FileDiffError;

/// Export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub format: DiffFormat,
    pub include_stats: bool,
    pub include_metadata: bool,
    pub width: usize, // For the side-by-side format
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: DiffFormat::Unified,
            include_stats: true,
            include_metadata: true,
            width: 120,
        }
    }
}

/// Handles exporting comparisons to files or other outputs
pub struct DiffExporter {
    config: ExportConfig,
}

impl DiffExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn with_format(format: DiffFormat) -> Self {
        Self {
            config: ExportConfig {
                format,
                ..Default::default()
            },
        }
    }

    /// Export a comparison to a file
    pub fn export_diff<P: AsRef<Path>>(
        &self,
        result: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        output_path: P,
    ) -> Result<(), FileDiffError> {
        let content = self.render(result, left_path, right_path);

        fs::write(output_path.as_ref(), content).map_err(|source| {
            FileDiffError::OutputUnavailable {
                path: output_path.as_ref().to_path_buf(),
                source,
            }
        })
    }

    /// Export to a writer (for streaming or custom outputs)
    pub fn export_to_writer<W: Write>(
        &self,
        result: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writer.write_all(self.render(result, left_path, right_path).as_bytes())
    }

    fn render(&self, result: &DiffResult, left_path: &Path, right_path: &Path) -> String {
        let mut content = String::new();

        if self.config.include_metadata {
            content.push_str(&self.format_metadata(left_path, right_path));
            content.push_str("\n\n");
        }

        if self.config.include_stats {
            content.push_str(&format!(
                "Changes: {}\n\n",
                DiffFormatter::format_stats(result)
            ));
        }

        content.push_str(&DiffFormatter::format(
            result,
            self.config.format,
            left_path,
            right_path,
            self.config.width,
            false,
        ));
        content.push('\n');

        content
    }

    fn format_metadata(&self, left_path: &Path, right_path: &Path) -> String {
        format!(
            "Comparison of {} and {}\nGenerated at: {}",
            left_path.display(),
            right_path.display(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
