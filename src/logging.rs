//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from [`LoggingConfig`], overridable through `GARDEN_LOG*` environment
//! variables. Logs default to stderr so command output on stdout stays clean.

use crate::error::GardenError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable to install no subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(".garden/garden.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// Install the global tracing subscriber.
///
/// Environment variables (`GARDEN_LOG`, `GARDEN_LOG_MODULES`,
/// `GARDEN_LOG_FORMAT`, `GARDEN_LOG_OUTPUT`) win over `config`, which already
/// carries any CLI flags folded in by the caller.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), GardenError> {
    if config.is_some_and(|c| !c.enabled) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let ansi = output != Output::File && config.map_or(true, |c| c.color);

    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(std::io::stdout),
        Output::Stderr => BoxMakeWriter::new(std::io::stderr),
        Output::File => BoxMakeWriter::new(open_log_file(config)?),
    };

    let registry = Registry::default().with(filter);
    let installed = match format {
        Format::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        Format::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|e| GardenError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn open_log_file(config: Option<&LoggingConfig>) -> Result<std::fs::File, GardenError> {
    let log_file = config
        .and_then(|c| c.file.clone())
        .unwrap_or_else(default_log_file);

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            GardenError::ConfigError(format!("Cannot create log directory {:?}: {}", parent, e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| GardenError::ConfigError(format!("Cannot open log file {:?}: {}", log_file, e)))
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, GardenError> {
    if let Ok(filter) = EnvFilter::try_from_env("GARDEN_LOG") {
        return Ok(filter);
    }

    let level = config.map_or("warn", |c| c.level.as_str());
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut directives: Vec<(String, String)> = config
        .map(|c| {
            c.modules
                .iter()
                .map(|(module, level)| (module.clone(), level.clone()))
                .collect()
        })
        .unwrap_or_default();
    if let Ok(from_env) = std::env::var("GARDEN_LOG_MODULES") {
        directives.extend(parse_module_levels(&from_env));
    }

    directives
        .into_iter()
        .try_fold(EnvFilter::new(level), |filter, (module, module_level)| {
            let directive = format!("{}={}", module, module_level)
                .parse()
                .map_err(|e| GardenError::ConfigError(format!("Invalid log directive for {}: {}", module, e)))?;
            Ok(filter.add_directive(directive))
        })
}

/// `module=level` pairs from a comma-separated list; malformed entries are skipped.
fn parse_module_levels(list: &str) -> Vec<(String, String)> {
    list.split(',')
        .filter_map(|entry| entry.split_once('='))
        .map(|(module, level)| (module.trim().to_string(), level.trim().to_string()))
        .filter(|(module, level)| !module.is_empty() && !level.is_empty())
        .collect()
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<Format, GardenError> {
    if let Some(format) = std::env::var("GARDEN_LOG_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f).ok())
    {
        return Ok(format);
    }
    parse_format(config.map_or("text", |c| c.format.as_str()))
}

fn parse_format(format: &str) -> Result<Format, GardenError> {
    match format {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => Err(GardenError::ConfigError(format!(
            "Unknown log format '{}', expected 'text' or 'json'",
            other
        ))),
    }
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<Output, GardenError> {
    match std::env::var("GARDEN_LOG_OUTPUT") {
        Ok(output) => parse_output(&output),
        Err(_) => parse_output(config.map_or("stderr", |c| c.output.as_str())),
    }
}

fn parse_output(output: &str) -> Result<Output, GardenError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        other => Err(GardenError::ConfigError(format!(
            "Unknown log output '{}', expected 'stdout', 'stderr' or 'file'",
            other
        ))),
    }
}
