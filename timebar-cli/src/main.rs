// timebar-cli/src/main.rs
//
// Entry point of the `timebar` binary: parses arguments, sets up logging,
// dispatches to the command and maps failures to exit code 1.

use std::process;

use clap::Parser;
use log::debug;

use timebar_cli::error::logging_setup_error;
use timebar_cli::{Cli, CliResult, Commands, logging, terminal};

fn setup_logging(cli: &Cli) -> CliResult<()> {
    let log_dir = match &cli.command {
        Commands::Run(args) => args.log_dir.as_deref(),
        _ => None,
    };

    match log_dir {
        Some(dir) => {
            let path = logging::init_file_logging(dir, cli.verbose).map_err(logging_setup_error)?;
            debug!("Logging to {}", path.display());
        }
        None => {
            logging::init_console_logging(cli.verbose).map_err(logging_setup_error)?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    setup_logging(&cli)?;

    match cli.command {
        Commands::Run(args) => timebar_cli::run_run(args),
        Commands::Show(args) => timebar_cli::run_show(args),
        Commands::List(args) => timebar_cli::run_list(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
