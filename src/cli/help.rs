//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log records (e.g. "record", "check").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Record { .. } => "record",
        Commands::Check { .. } => "check",
    }
}
