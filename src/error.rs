//! Error types for confirmify
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for confirmify operations
pub type ConfirmifyResult<T> = Result<T, ConfirmifyError>;

/// Main error type for confirmify operations
#[derive(Error, Debug)]
pub enum ConfirmifyError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid UTF-8
    #[error("file {file} is not valid UTF-8")]
    Utf8 { file: PathBuf },

    /// Failed to write the rewritten file back
    #[error("failed to write {file}: {message}")]
    Write { file: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A rule pattern failed to compile
    #[error("regex error: {0}")]
    Pattern(#[from] regex::Error),
}
