//! CLI parse: clap types for hashguard. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hashguard - detect added, modified and deleted files against a recorded baseline
#[derive(Parser, Debug)]
#[command(name = "hashguard")]
#[command(about = "File integrity monitoring through content-digest baselines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Baseline file path (overrides baseline.path from config)
    #[arg(long, global = true)]
    pub baseline: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and save its digests as the baseline
    Record {
        /// Directory to monitor
        directory: PathBuf,
    },
    /// Compare a directory against the saved baseline
    Check {
        /// Directory to monitor
        directory: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
