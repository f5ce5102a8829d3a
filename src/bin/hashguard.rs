//! Hashguard CLI Binary
//!
//! Command-line interface for the hashguard file integrity monitor.
//! Exit codes: 0 clean or recorded, 1 changes detected, 2 failure.

use clap::Parser;
use hashguard::cli::{map_error, Cli, RunContext, EXIT_FAILURE};
use hashguard::config::HashguardConfig;
use hashguard::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let config = match RunContext::load_config(cli.config.as_deref()) {
        Ok(config) => apply_overrides(cli, config),
        Err(e) => {
            eprintln!("{}", map_error(&e));
            return EXIT_FAILURE;
        }
    };

    let logging_config = build_logging_config(cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        return EXIT_FAILURE;
    }

    info!("Hashguard CLI starting");

    let context = match RunContext::from_config(config) {
        Ok(ctx) => ctx.with_color(std::io::stdout().is_terminal()),
        Err(e) => {
            error!("Error initializing CLI context: {}", e);
            eprintln!("{}", map_error(&e));
            return EXIT_FAILURE;
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.text);
            output.exit_code
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            EXIT_FAILURE
        }
    }
}

/// Apply CLI flags that override file and environment configuration.
fn apply_overrides(cli: &Cli, mut config: HashguardConfig) -> HashguardConfig {
    if let Some(ref baseline) = cli.baseline {
        config.baseline.path = baseline.clone();
    }
    config
}

/// Build logging configuration from CLI args on top of the config file section.
/// Logging stays off unless --verbose or --log-level is given.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    } else if cli.log_level.is_none() {
        config.level = "off".to_string();
    }

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
