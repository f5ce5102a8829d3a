//! CLI route: single route table and run context. Dispatches to the integrity API and presentation.

use crate::api::IntegrityApi;
use crate::cli::output::{EXIT_CHANGES_DETECTED, EXIT_SUCCESS};
use crate::cli::parse::{Commands, ReportFormat};
use crate::cli::presentation::{format_check_json, format_check_text, format_record_summary};
use crate::cli::command_name;
use crate::config::{ConfigLoader, HashguardConfig};
use crate::diff::CheckStatus;
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Rendered command result plus the process exit code it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

/// Runtime context for CLI execution: resolved config and the integrity API.
pub struct RunContext {
    api: IntegrityApi,
    baseline_path: PathBuf,
    color: bool,
}

impl RunContext {
    /// Load and validate configuration, from `config_path` when given, otherwise
    /// from the standard sources relative to the working directory.
    pub fn load_config(config_path: Option<&Path>) -> Result<HashguardConfig, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(Path::new("."))?,
        };
        Ok(config)
    }

    /// Create run context from a merged configuration.
    pub fn from_config(config: HashguardConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        debug!(
            baseline = %config.baseline.path.display(),
            algorithm = %config.scan.algorithm,
            "CLI context configured"
        );

        Ok(Self {
            api: IntegrityApi::from_config(&config),
            baseline_path: config.baseline.path,
            color: false,
        })
    }

    /// Enable colored report headings
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn api(&self) -> &IntegrityApi {
        &self.api
    }

    /// Execute a command and render its output
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let start = Instant::now();
        let output = match command {
            Commands::Record { directory } => {
                let snapshot = self.api.record_baseline(directory)?;
                let text =
                    format_record_summary(directory, &snapshot, &self.baseline_path, self.color);
                CommandOutput {
                    text,
                    exit_code: EXIT_SUCCESS,
                }
            }
            Commands::Check { directory, format } => {
                let result = self.api.check(directory)?;
                let text = match format {
                    ReportFormat::Text => format_check_text(&result, self.color),
                    ReportFormat::Json => format_check_json(&result),
                };
                let exit_code = match result.status() {
                    CheckStatus::Clean => EXIT_SUCCESS,
                    CheckStatus::ChangesDetected => EXIT_CHANGES_DETECTED,
                };
                CommandOutput { text, exit_code }
            }
        };

        info!(
            command = command_name(command),
            exit_code = output.exit_code,
            duration_ms = start.elapsed().as_millis(),
            "Command finished"
        );
        Ok(output)
    }
}
