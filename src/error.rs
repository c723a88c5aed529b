//! Error taxonomy for the benchmark pipeline
//!
//! Loader and detector errors are fatal to the invoking command. Only chart
//! rendering degrades gracefully (see `charts`).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing outputs
#[derive(Error, Debug)]
pub enum FqperfError {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Malformed input in {}: {}", .path.display(), .detail)]
    MalformedInput { path: PathBuf, detail: String },

    #[error("Failed to write output to {}: {}", .path.display(), .source)]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, FqperfError>;
