//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::HashguardConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard files and environment.
    ///
    /// `working_dir` is where a local `hashguard.toml` is looked up.
    pub fn load(working_dir: &Path) -> Result<HashguardConfig, ConfigError> {
        MergeService::load(working_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<HashguardConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> HashguardConfig {
        HashguardConfig::default()
    }
}
