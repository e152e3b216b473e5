// timebar-cli/src/config.rs
//
// Defines default configuration constants for the `timebar` CLI.

/// Prefix of the run log file name, followed by a timestamp.
pub const LOG_FILE_PREFIX: &str = "timebar_run";

/// Real-time speed factor.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Poll period while waiting for a non-interactive run to finish.
pub const FINISH_POLL_MS: u64 = 50;

/// Width of the countdown bar, in terminal cells.
pub const BAR_WIDTH: usize = 40;

/// One-line summary of the keyboard controls.
pub const KEY_HELP: &str = "space start/pause  ← previous  → next  r restart  s sound  q quit";
