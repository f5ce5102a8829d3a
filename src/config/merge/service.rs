//! MergeService: orchestrates sources, applies merge policy, deserializes to HashguardConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::HashguardConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: global file (lowest) -> local file -> environment (highest).
    pub fn load(working_dir: &Path) -> Result<HashguardConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, working_dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<HashguardConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
