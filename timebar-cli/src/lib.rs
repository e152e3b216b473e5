// timebar-cli/src/lib.rs
//
// Library portion of the Timebar CLI application.
// Contains argument definitions, command logic and the terminal display.

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ListArgs, RunArgs, ShowArgs};
pub use commands::list::run_list;
pub use commands::run::run_run;
pub use commands::show::run_show;
pub use display::TerminalDisplay;
pub use error::{CliErrorContext, CliResult, FailurePoint};
