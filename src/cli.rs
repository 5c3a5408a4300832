use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::diff::DiffFormat;
use crate::error::FileDiffError;
use crate::merge::ApplyDirection;

#[derive(Parser)]
#[command(name = "filediff")]
#[command(version = "0.1.0")]
#[command(about = "A fast side-by-side file comparison tool for the terminal")]
#[command(
    long_about = "FileDiff compares two text files line by line and renders the result as a side-by-side view, a unified view, JSON, or a change summary. It can also copy one side over the other or write a merged output file."
)]
pub struct Cli {
    /// Left file to compare
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Right file to compare
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "side-by-side", help = "Output format")]
    pub output: OutputFormat,

    /// Total display width for the side-by-side view
    #[arg(long, help = "Display width (defaults to the configured width)")]
    pub width: Option<usize>,

    /// Disable colors in output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH", help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Export the rendered comparison to a file
    #[arg(long, value_name = "PATH", help = "Write the comparison to a file")]
    pub export: Option<PathBuf>,

    /// Write a merged output file (the right side's content wins)
    #[arg(long, value_name = "PATH", help = "Write a merged output file")]
    pub merge_into: Option<PathBuf>,

    /// Copy one side's content over the other after comparing
    #[arg(long, value_name = "DIRECTION", help = "Copy one side over the other")]
    pub apply: Option<ApplyDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-column terminal view (default)
    SideBySide,
    /// Single-column view with -/+ prefixes
    Unified,
    /// JSON output for scripting
    Json,
    /// One-line change summary
    Stats,
}

impl Cli {
    pub fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }

    /// Reject malformed requests before any file is touched. Unreadable
    /// inputs are not checked here; the loader reports those.
    pub fn validate(&self) -> Result<(), FileDiffError> {
        if let Some(width) = self.width {
            if width == 0 {
                return Err(FileDiffError::InvalidRequest(
                    "width must be greater than 0".to_string(),
                ));
            }
        }

        if self.apply.is_some() && self.merge_into.is_some() {
            return Err(FileDiffError::InvalidRequest(
                "--apply and --merge-into cannot be combined".to_string(),
            ));
        }

        Ok(())
    }

    /// The text format to use when exporting.
    pub fn export_format(&self) -> DiffFormat {
        match self.output {
            OutputFormat::SideBySide => DiffFormat::SideBySide,
            OutputFormat::Unified | OutputFormat::Json | OutputFormat::Stats => {
                DiffFormat::Unified
            }
        }
    }
}
