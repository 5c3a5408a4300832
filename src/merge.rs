use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::FileDiffError;

/// Which side's content wins when applying changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApplyDirection {
    /// Write the left file's content over the right file
    LeftToRight,
    /// Write the right file's content over the left file
    RightToLeft,
}

/// Copy one side's content over the other, byte for byte.
pub fn apply_changes(
    left: &Path,
    right: &Path,
    direction: ApplyDirection,
) -> Result<(), FileDiffError> {
    let (source, target) = match direction {
        ApplyDirection::LeftToRight => (left, right),
        ApplyDirection::RightToLeft => (right, left),
    };

    let bytes = read_bytes(source)?;
    write_bytes(target, &bytes)?;
    tracing::info!("Applied {} onto {}", source.display(), target.display());
    Ok(())
}

/// Write the merged result of two files to a separate output path.
///
/// The right side's content wins wholesale; conflicts are not resolved.
pub fn merge_files(_left: &Path, right: &Path, output: &Path) -> Result<(), FileDiffError> {
    let bytes = read_bytes(right)?;
    write_bytes(output, &bytes)?;
    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, FileDiffError> {
    fs::read(path).map_err(|source| FileDiffError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), FileDiffError> {
    fs::write(path, bytes).map_err(|source| FileDiffError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
