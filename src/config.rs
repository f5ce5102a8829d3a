//! Configuration System
//!
//! Layered configuration: built-in defaults, a global config file, a local
//! `hashguard.toml`, then `HASHGUARD__*` environment variables (highest).

use crate::logging::LoggingConfig;
use crate::store::persistence::DEFAULT_BASELINE_FILE;
use crate::tree::hasher::{FileHasher, HashAlgorithm, DEFAULT_CHUNK_SIZE};
use crate::tree::scanner::Scanner;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::local_file::LOCAL_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashguardConfig {
    /// Baseline storage settings
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Baseline storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Baseline file path (relative paths resolve against the working directory)
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_FILE)
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Digest algorithm: blake3 or sha256
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Read chunk size in bytes
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Path component names to skip (e.g. ".git")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum traversal depth (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            chunk_size: default_chunk_size(),
            ignore_patterns: Vec::new(),
            max_depth: None,
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    /// Walker settings derived from this config
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            exclude_paths: Vec::new(),
            max_depth: self.max_depth,
        }
    }

    pub fn hasher(&self) -> FileHasher {
        FileHasher::new(self.algorithm).with_chunk_size(self.chunk_size)
    }

    /// Build a scanner from this config
    pub fn scanner(&self) -> Scanner {
        Scanner::new()
            .with_walker_config(self.walker_config())
            .with_hasher(self.hasher())
    }

    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        if self.ignore_patterns.iter().any(|p| p.is_empty()) {
            return Err("ignore_patterns cannot contain empty entries".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Baseline(String),
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Baseline(msg) => write!(f, "Baseline: {}", msg),
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl HashguardConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.baseline.path.as_os_str().is_empty() {
            errors.push(ValidationError::Baseline(
                "Baseline path cannot be empty".to_string(),
            ));
        }

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
