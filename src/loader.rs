use std::fs;
use std::io;
use std::path::Path;

use crate::error::FileDiffError;

/// Reads comparison inputs into memory.
///
/// Every read or decode failure is surfaced here, before the comparison
/// engine is ever invoked. Inputs larger than the configured threshold are
/// logged, since comparison cost grows with the product of the two line
/// counts.
pub struct FileLoader {
    size_warn_bytes: u64,
}

impl FileLoader {
    /// Create a loader. `size_warn_bytes` of 0 disables the size warning.
    pub fn new(size_warn_bytes: u64) -> Self {
        Self { size_warn_bytes }
    }

    /// Read one file as UTF-8 text.
    pub fn load(&self, path: &Path) -> Result<String, FileDiffError> {
        let bytes = fs::read(path).map_err(|source| FileDiffError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        if self.size_warn_bytes > 0 && bytes.len() as u64 > self.size_warn_bytes {
            tracing::warn!(
                "{} is {} bytes; large files make the comparison expensive",
                path.display(),
                bytes.len()
            );
        }

        let text = String::from_utf8(bytes).map_err(|err| FileDiffError::InputUnavailable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })?;

        tracing::debug!("loaded {} ({} bytes)", path.display(), text.len());
        Ok(text)
    }

    /// Read both sides of a comparison.
    pub fn load_pair(
        &self,
        left: &Path,
        right: &Path,
    ) -> Result<(String, String), FileDiffError> {
        Ok((self.load(left)?, self.load(right)?))
    }
}
