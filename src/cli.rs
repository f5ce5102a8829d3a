//! CLI domain: parse, route, help, output, and presentation only.
//! No integrity logic here; the route table dispatches to the API.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, EXIT_CHANGES_DETECTED, EXIT_FAILURE, EXIT_SUCCESS};
pub use parse::{Cli, Commands, ReportFormat};
pub use presentation::{format_check_json, format_check_text, format_record_summary};
pub use route::{CommandOutput, RunContext};
