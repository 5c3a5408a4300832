use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the file loader, merge operations, and configuration.
///
/// The comparison engine itself has no error kind: any two well-formed
/// strings yield a well-formed result, so failures can only occur before the
/// engine runs (loading, validation) or after it (writing output).
#[derive(Debug, Error)]
pub enum FileDiffError {
    /// An input file could not be read or decoded.
    #[error("could not read {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("could not write {path}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request was malformed before any file was touched.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A configuration file or value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
