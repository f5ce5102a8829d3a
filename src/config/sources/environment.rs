//! Environment variable source: HASHGUARD__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses HASHGUARD__ prefix and __ as separator for nested keys, e.g.
/// `HASHGUARD__SCAN__ALGORITHM=sha256`. `scan.ignore_patterns` is comma separated.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("HASHGUARD")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("scan.ignore_patterns")
            .try_parsing(true),
    );
    Ok(builder)
}
