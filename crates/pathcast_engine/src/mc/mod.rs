//! Monte Carlo simulation: configuration, path generation, aggregation.

mod aggregate;
mod config;
mod ensemble;
mod error;
pub mod paths;
mod simulator;

pub use aggregate::{aggregate, SummaryFrame, SummaryRow};
pub use config::{ConfigError, SimulationConfig, SimulationConfigBuilder, DEFAULT_DT};
pub use ensemble::PathEnsemble;
pub use error::EngineError;
pub use simulator::{MonteCarloSimulator, SimulationOutput};
