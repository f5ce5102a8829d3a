//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("baseline.path", "file_hashes.json")?
        .set_default("scan.algorithm", "blake3")?
        .set_default("scan.chunk_size", 4096_i64)?
        .set_default("scan.follow_symlinks", false)
}
