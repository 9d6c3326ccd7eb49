//! Error type shared by every setup stage.
//!
//! Library functions return [`SetupError`]; the binaries wrap it in
//! `color_eyre` reports with additional context.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SetupError>;

/// Errors that can occur while configuring nodes or converting event exports
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("Config directory not found for node: {node}")]
    MissingConfigDir { node: String, path: PathBuf },

    #[error("Node identity command not available: {binary}")]
    IdentityCommandUnavailable { binary: String },

    #[error("Node identity query for {node} failed ({status}): {stderr}")]
    IdentityCommandFailed {
        node: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Node identity query for {node} returned an empty id")]
    EmptyNodeId { node: String },

    #[error("Unexpected document shape in {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid event row at line {line}: {reason}")]
    InvalidEventRow { line: u64, reason: String },
}

impl SetupError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SetupError::InvalidDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
