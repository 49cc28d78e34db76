//! Error types for branchinvlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a diff directory
#[derive(Error, Debug)]
pub enum BranchInvError {
    /// Failed to read a diff file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Diff file is not valid UTF-8 and strict decoding was requested
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Scan root exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
