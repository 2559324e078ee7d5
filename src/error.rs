//! Error types for syllabus-chunks.

use std::path::PathBuf;

/// Errors that can occur while loading appendices or writing chunks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The appendix directory does not exist or is not a directory.
    #[error("appendix directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Reading an input file or listing the input directory failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An appendix file is not valid JSON or lacks a required field.
    #[error("malformed appendix {}: {source}", path.display())]
    Parse {
        /// The offending appendix file.
        path: PathBuf,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing the chunk collection failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding the chunk collection failed.
    #[error("failed to encode chunks: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid chunk bounds.
    #[error(transparent)]
    Capacity(#[from] crate::ChunkCapacityError),

    /// A placeholder pattern failed to compile.
    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for syllabus-chunks operations.
pub type Result<T> = std::result::Result<T, Error>;
