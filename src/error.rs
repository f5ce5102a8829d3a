//! Error types for the hashguard file integrity monitor.
//!
//! Per-file read failures are not errors: they are recorded in the snapshot as
//! [`Digest::Unreadable`](crate::types::Digest::Unreadable). Only traversal,
//! storage and configuration failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Directory traversal errors (fatal for a scan)
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Cannot traverse root {path:?}: directory does not exist")]
    RootNotFound { path: PathBuf },

    #[error("Cannot traverse root {path:?}: not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Cannot traverse root {path:?}: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Baseline storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Baseline at {path:?} is corrupt: {source}")]
    BaselineCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read baseline {path:?}: {source}")]
    BaselineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write baseline {path:?}: {source}")]
    BaselineWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save digest for {key:?}: {reason}")]
    InvalidDigest { key: String, reason: String },

    #[error("Failed to serialize baseline: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// API-level errors returned by [`IntegrityApi`](crate::api::IntegrityApi)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
