//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Structural failures that abort processing of a whole source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size gate.
    #[error("file {path} is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Extension is neither CSV nor plain text.
    #[error("unsupported file type '{extension}' for {path} (expected .csv or .txt)")]
    UnsupportedFileType { path: PathBuf, extension: String },

    /// Content is not valid UTF-8.
    #[error("file {path} is not valid UTF-8 text")]
    InvalidEncoding { path: PathBuf },

    /// No non-blank lines.
    #[error("input is empty")]
    EmptyInput,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
