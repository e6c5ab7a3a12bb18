//! Error types for `EdsKit`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `EdsKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Pipeline Errors ====================
    /// The input path given to the pipeline does not exist.
    #[error("input path does not exist: {path}")]
    InputPathMissing {
        /// The missing input path.
        path: PathBuf,
    },

    /// The archive name strips to an empty base name (a file named exactly
    /// `.eds` or `.zip`).
    #[error("archive name has no base name: {path}")]
    EmptyBaseName {
        /// The offending archive path.
        path: PathBuf,
    },

    /// The archive file name is not valid UTF-8.
    #[error("archive name is not valid UTF-8: {path}")]
    NonUtf8Name {
        /// The offending archive path.
        path: PathBuf,
    },

    // ==================== ZIP Container Errors ====================
    /// The staged archive is not a readable ZIP container.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An archive entry path would resolve outside the extraction directory.
    #[error("entry path escapes the extraction directory: {entry}")]
    EntryPathEscapes {
        /// The entry path as stored in the archive.
        entry: String,
    },
}

/// A specialized Result type for `EdsKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
