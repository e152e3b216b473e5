// timebar-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Timebar: meeting agenda countdown",
    long_about = "Counts down a meeting agenda sequence by sequence in the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the countdown of an agenda
    Run(RunArgs),
    /// Prints how an agenda splits the bar
    Show(ShowArgs),
    /// Lists the agendas available in a directory
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Agenda name (<DIR>/<NAME>.json) or path to an agenda document
    #[arg(required = true, value_name = "AGENDA")]
    pub agenda: String,

    /// Directory containing agenda documents
    #[arg(short = 'd', long, value_name = "DIR", env = "TIMEBAR_AGENDA_DIR")]
    pub agenda_dir: Option<PathBuf>,

    /// Clock period in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Run the clock this many times faster than real time
    #[arg(long, value_name = "FACTOR", default_value_t = 1.0)]
    pub speed: f64,

    /// Disable the bell on automatic sequence transitions
    #[arg(long, default_value_t = false)]
    pub no_sound: bool,

    /// Start the clock immediately instead of waiting for space
    #[arg(long, default_value_t = false)]
    pub autostart: bool,

    /// Run the whole agenda on a virtual clock and exit
    #[arg(long = "virtual", default_value_t = false)]
    pub virtual_clock: bool,

    /// Write display events to stdout as JSON lines
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Optional: Directory for a run log file
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Agenda name or path to an agenda document
    #[arg(required = true, value_name = "AGENDA")]
    pub agenda: String,

    /// Directory containing agenda documents
    #[arg(short = 'd', long, value_name = "DIR", env = "TIMEBAR_AGENDA_DIR")]
    pub agenda_dir: Option<PathBuf>,

    /// Print the partitioned agenda as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing agenda documents
    #[arg(short = 'd', long, value_name = "DIR", env = "TIMEBAR_AGENDA_DIR")]
    pub agenda_dir: Option<PathBuf>,
}
