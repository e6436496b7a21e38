//! Logging initialization for the `links` binary.
//!
//! Stdout carries the extracted links, so terminal logging goes to stderr.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to stderr.
    Terminal,
    /// Write to the given file, truncating it.
    File(PathBuf),
    /// Write to both stderr and the given file.
    Both(PathBuf),
}

impl LogDestination {
    /// Pick a destination from the CLI flags; `None` disables logging.
    pub fn select(log_file: Option<PathBuf>, quiet: bool) -> Option<Self> {
        match (log_file, quiet) {
            (Some(path), true) => Some(LogDestination::File(path)),
            (Some(path), false) => Some(LogDestination::Both(path)),
            (None, true) => None,
            (None, false) => Some(LogDestination::Terminal),
        }
    }
}

/// Install the global logger. Calling this twice keeps the first logger.
pub fn initialize(destination: &LogDestination, level: LevelFilter) -> anyhow::Result<()> {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Terminal => vec![terminal_logger(level, config)],
        LogDestination::File(path) => vec![file_logger(path, level, config)?],
        LogDestination::Both(path) => vec![
            terminal_logger(level, config.clone()),
            file_logger(path, level, config)?,
        ],
    };

    let _ = CombinedLogger::init(loggers);
    Ok(())
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(link_logging::TARGET_PREFIX)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> anyhow::Result<Box<dyn SharedLogger>> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    Ok(WriteLogger::new(level, config, file))
}
