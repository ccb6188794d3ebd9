//! Engine-level error type.

use thiserror::Error;

use pathcast_models::ModelError;

use super::config::ConfigError;

/// Errors surfaced by a simulation run.
///
/// A failed run is fatal to that call only; the simulator holds no
/// mutable state across runs, so the caller can correct the input and
/// retry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// The simulation configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Model selection or parameter assembly failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The run was cancelled through its [`CancelToken`](pathcast_core::CancelToken).
    #[error("simulation cancelled")]
    Cancelled,
}
