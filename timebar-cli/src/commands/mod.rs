//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the `list` command: agendas available in a directory.
pub mod list;

/// Module containing the `run` command: the countdown itself.
pub mod run;

/// Module containing the `show` command: how an agenda splits the bar.
pub mod show;

use std::path::PathBuf;

use timebar_core::CoreConfig;

/// Agenda directory from the flag, else from the environment-backed config.
pub(crate) fn resolve_agenda_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| CoreConfig::from_env().agenda_dir)
}
