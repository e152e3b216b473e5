use thiserror::Error;

/// Error types for timebar-core.
///
/// Only agenda loading and configuration can fail. Degenerate agendas,
/// navigation at the finished step and rounding misses at sequence
/// boundaries are handled inside the engine and never surface here.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Agenda not found: {0}")]
    AgendaNotFound(String),

    #[error("Invalid agenda document: {0}")]
    AgendaParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for timebar-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
