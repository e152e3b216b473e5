// ============================================================================
// timebar-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Logging
//
// Without a log directory the CLI logs through env_logger on stderr, honoring
// RUST_LOG. With --log-dir, a fern dispatch writes a timestamped run log with
// ANSI codes stripped, and only warnings still reach the console so the
// countdown display stays readable.
//
// USAGE:
// - RUST_LOG=warn (default): only problems on the console
// - -v / --verbose: debug-level logging
//
// AI-ASSISTANT-INFO: Logging utilities and helper functions

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;

use crate::config::LOG_FILE_PREFIX;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("timebar_run_{}.log", timebar_cli::logging::get_timestamp());
/// assert_eq!(log_filename.len(), "timebar_run_20240601_123045.log".len());
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Level used for console and file logging.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger on stderr.
pub fn init_console_logging(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialize console logging")
}

/// Initializes a fern dispatch writing to `<log_dir>/timebar_run_<timestamp>.log`.
///
/// Returns the path of the log file.
pub fn init_file_logging(log_dir: &Path, verbose: bool) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join(format!("{}_{}.log", LOG_FILE_PREFIX, get_timestamp()));
    let log_file = fern::log_file(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let file_dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let plain = strip_ansi_escapes::strip_str(message.to_string());
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                plain
            ))
        })
        .level(level_for(verbose))
        .chain(log_file);

    let console_dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}: {}", record.level(), message)))
        .level(LevelFilter::Warn)
        .chain(std::io::stderr());

    fern::Dispatch::new()
        .chain(file_dispatch)
        .chain(console_dispatch)
        .apply()
        .context("Failed to install file logger")?;

    Ok(log_path)
}
