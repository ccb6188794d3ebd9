//! CLI error surface.

use thiserror::Error;

use pathcast_engine::EngineError;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the configuration, model, or parameters.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A parameter file could not be read.
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file could not be parsed.
    #[error("invalid parameter file: {0}")]
    Json(#[from] serde_json::Error),
}
