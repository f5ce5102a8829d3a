//! Local config file source: hashguard.toml in the working directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Name of the local config file
pub const LOCAL_CONFIG_FILE: &str = "hashguard.toml";

/// Add the local config file to builder if present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let local_path = working_dir.join(LOCAL_CONFIG_FILE);
    if local_path.exists() {
        return Ok(builder.add_source(File::from(local_path).required(false)));
    }
    Ok(builder)
}
