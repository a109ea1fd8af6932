//! `garden` binary: publish status for a digital-garden vault.

use clap::Parser;
use garden::cli::{Cli, RunContext};
use garden::config::GardenConfig;
use garden::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();
    let loaded = RunContext::load_config(&cli.workspace, cli.config.as_deref());

    if let Err(e) = init_logging(Some(&build_logging_config(&cli, loaded.as_ref().ok()))) {
        eprintln!("garden: cannot set up logging: {}", e);
        process::exit(1);
    }
    debug!(workspace = %cli.workspace.display(), "starting");

    let result = loaded
        .and_then(|config| RunContext::from_config(config, &cli.workspace))
        .and_then(|context| context.execute(&cli.command));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(error = %e, "garden command failed");
            eprintln!("{}", garden::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Logging settings for this run: the `[logging]` section of the loaded
/// configuration (defaults when it failed to load) with logging flags on top.
fn build_logging_config(cli: &Cli, config: Option<&GardenConfig>) -> LoggingConfig {
    let mut logging = config.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.quiet {
        logging.enabled = false;
    }
    if let Some(level) = cli.log_level.clone().or_else(|| cli.verbose.then(|| "debug".to_string())) {
        logging.level = level;
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    if cli.log_file.is_some() {
        logging.file = cli.log_file.clone();
    }

    logging
}
