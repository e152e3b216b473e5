//! Error reporting for the `timebar` binary.
//!
//! Commands return core errors unchanged. Failures at the binary's own
//! boundaries are wrapped into `CoreError::OperationFailed`, prefixed with
//! the [`FailurePoint`] they happened at, so `main` can print a single
//! `Error:` line.

use std::fmt;
use std::path::Path;

use timebar_core::{CoreError, CoreResult};

pub type CliResult<T> = CoreResult<T>;

/// Where in the binary an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint<'a> {
    /// Resolving and parsing the named agenda.
    LoadAgenda(&'a str),
    /// Scanning an agenda directory.
    ReadAgendaDir(&'a Path),
    /// Reading a key in the interactive loop.
    ReadKey,
    /// Installing the console or file logger.
    LoggingSetup,
}

impl fmt::Display for FailurePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadAgenda(name) => write!(f, "Failed to load agenda '{name}'"),
            Self::ReadAgendaDir(dir) => {
                write!(f, "Failed to read agenda directory {}", dir.display())
            }
            Self::ReadKey => f.write_str("Failed to read from the terminal"),
            Self::LoggingSetup => f.write_str("Failed to set up logging"),
        }
    }
}

/// Tags a failed result with the point it failed at.
pub trait CliErrorContext<T> {
    fn failed_at(self, point: FailurePoint<'_>) -> CliResult<T>;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn failed_at(self, point: FailurePoint<'_>) -> CliResult<T> {
        self.map_err(|e| CoreError::OperationFailed(format!("{point}: {}", e.into())))
    }
}

/// Logger setup reports through `anyhow`; keep its whole context chain.
pub fn logging_setup_error(err: anyhow::Error) -> CoreError {
    CoreError::OperationFailed(format!("{}: {err:#}", FailurePoint::LoggingSetup))
}
