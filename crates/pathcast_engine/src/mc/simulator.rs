//! The Monte Carlo simulation driver.
//!
//! [`MonteCarloSimulator`] owns the simulation-wide settings and
//! dispatches a validated parameter set to the matching path generator.
//! Path generation is parallelised across the path dimension: paths are
//! split into fixed-size blocks, each driven by an RNG stream forked
//! deterministically from the run seed, so output is bit-identical for a
//! given seed regardless of thread count.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use pathcast_core::{CancelToken, SimRng};
use pathcast_models::{ModelKind, ModelParams, ParameterBag};

use super::aggregate::{aggregate, SummaryFrame};
use super::config::{ConfigError, SimulationConfig};
use super::ensemble::PathEnsemble;
use super::error::EngineError;
use super::paths::{gbm, heston, ornstein_uhlenbeck, HestonPaths};

/// Number of paths per parallel block.
///
/// Fixed (rather than derived from the thread count) so the block
/// decomposition, and with it the RNG stream assignment, is identical on
/// every machine.
const PATHS_PER_BLOCK: usize = 1024;

/// Result of one simulation run.
///
/// Always carries the primary value ensemble; for Heston it additionally
/// carries the co-indexed variance ensemble.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    paths: PathEnsemble,
    variances: Option<PathEnsemble>,
}

impl SimulationOutput {
    /// The simulated value paths (price for GBM/Heston, level for OU).
    pub fn paths(&self) -> &PathEnsemble {
        &self.paths
    }

    /// The variance paths, present for Heston runs only.
    pub fn variances(&self) -> Option<&PathEnsemble> {
        self.variances.as_ref()
    }

    /// Consumes the output, returning the value ensemble.
    pub fn into_paths(self) -> PathEnsemble {
        self.paths
    }
}

/// Monte Carlo simulation engine.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::{MonteCarloSimulator, SimulationConfig};
/// use pathcast_models::{GbmParams, ModelParams};
///
/// let config = SimulationConfig::builder()
///     .n_paths(500)
///     .horizon_years(1.0)
///     .seed(42)
///     .build()
///     .unwrap();
/// let simulator = MonteCarloSimulator::new(config).unwrap();
///
/// let params = ModelParams::Gbm(GbmParams::new(100.0, 0.05, 0.2).unwrap());
/// let output = simulator.run(&params).unwrap();
/// assert_eq!(output.paths().n_paths(), 500);
/// assert_eq!(output.paths().n_steps(), 252);
///
/// let summary = simulator.aggregate(output.paths());
/// assert_eq!(summary.len(), 252);
/// ```
pub struct MonteCarloSimulator {
    config: SimulationConfig,
    cancel: CancelToken,
}

impl MonteCarloSimulator {
    /// Creates a simulator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancelToken::new(),
        })
    }

    /// Attaches an externally held cancellation token.
    ///
    /// The token is polled inside every path generator's outer loop;
    /// cancelling it makes in-flight and future runs fail with
    /// [`EngineError::Cancelled`].
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The simulator's configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs a simulation for an already-validated parameter set.
    ///
    /// # Errors
    ///
    /// [`EngineError::Cancelled`] if the attached token fires mid-run.
    pub fn run(&self, params: &ModelParams) -> Result<SimulationOutput, EngineError> {
        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let dt = self.config.dt();

        let mut root = match self.config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        };
        info!(
            model = %params.kind(),
            n_paths,
            n_steps,
            seed = root.seed(),
            "starting simulation"
        );
        let started = Instant::now();

        let blocks = block_sizes(n_paths);
        let streams = root.fork(blocks.len());
        debug!(n_blocks = blocks.len(), block_size = PATHS_PER_BLOCK, "path blocks");

        let output = match params {
            ModelParams::Gbm(p) => {
                let parts: Result<Vec<PathEnsemble>, EngineError> = blocks
                    .into_par_iter()
                    .zip(streams)
                    .map(|(block, mut stream)| {
                        gbm::generate(p, block, n_steps, dt, &mut stream, &self.cancel)
                    })
                    .collect();
                SimulationOutput {
                    paths: PathEnsemble::stitch(parts?),
                    variances: None,
                }
            }
            ModelParams::Heston(p) => {
                let parts: Result<Vec<HestonPaths>, EngineError> = blocks
                    .into_par_iter()
                    .zip(streams)
                    .map(|(block, mut stream)| {
                        heston::generate(p, block, n_steps, dt, &mut stream, &self.cancel)
                    })
                    .collect();
                let (prices, variances): (Vec<_>, Vec<_>) =
                    parts?.into_iter().map(|hp| (hp.prices, hp.variances)).unzip();
                SimulationOutput {
                    paths: PathEnsemble::stitch(prices),
                    variances: Some(PathEnsemble::stitch(variances)),
                }
            }
            ModelParams::OrnsteinUhlenbeck(p) => {
                let parts: Result<Vec<PathEnsemble>, EngineError> = blocks
                    .into_par_iter()
                    .zip(streams)
                    .map(|(block, mut stream)| {
                        ornstein_uhlenbeck::generate(p, block, n_steps, dt, &mut stream, &self.cancel)
                    })
                    .collect();
                SimulationOutput {
                    paths: PathEnsemble::stitch(parts?),
                    variances: None,
                }
            }
        };

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "simulation complete"
        );
        Ok(output)
    }

    /// Runs a simulation for a model chosen by name with a dynamic
    /// parameter bag.
    ///
    /// This is the boundary entry point for the CLI and other dynamic
    /// callers: the name is parsed (`gbm`, `heston`, `ou`) and the bag is
    /// converted into a validated parameter set before anything is
    /// simulated.
    ///
    /// # Errors
    ///
    /// - [`pathcast_models::ModelError::UnsupportedModel`] for an unknown
    ///   model name.
    /// - [`pathcast_models::ModelError::MissingParameter`] naming the
    ///   first absent field.
    /// - [`pathcast_models::ModelError::InvalidParameter`] for a present
    ///   but out-of-domain value.
    pub fn run_named(
        &self,
        model: &str,
        bag: &ParameterBag,
    ) -> Result<SimulationOutput, EngineError> {
        let kind: ModelKind = model.parse().map_err(EngineError::Model)?;
        let params = ModelParams::from_bag(kind, bag).map_err(EngineError::Model)?;
        self.run(&params)
    }

    /// Reduces an ensemble to per-step summary statistics.
    pub fn aggregate(&self, ensemble: &PathEnsemble) -> SummaryFrame {
        aggregate(ensemble)
    }
}

/// Splits `n_paths` into fixed-size blocks (last block may be short).
fn block_sizes(n_paths: usize) -> Vec<usize> {
    let full = n_paths / PATHS_PER_BLOCK;
    let rest = n_paths % PATHS_PER_BLOCK;
    let mut blocks = vec![PATHS_PER_BLOCK; full];
    if rest > 0 {
        blocks.push(rest);
    }
    blocks
}
