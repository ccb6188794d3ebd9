//! # Pathcast Engine (simulation layer)
//!
//! Monte Carlo projection engine for the supported stochastic models.
//!
//! This crate provides:
//! - [`mc::SimulationConfig`] — validated simulation-wide settings
//!   (path count, horizon, step size, optional seed)
//! - Path generators for GBM, Heston, and Ornstein-Uhlenbeck under
//!   [`mc::paths`]
//! - [`mc::MonteCarloSimulator`] — the dispatching driver, with
//!   path-parallel generation via `rayon`
//! - [`mc::aggregate`] — per-step cross-sectional summary statistics
//!
//! ## Determinism
//!
//! Given a seed, a simulation produces bit-identical output regardless of
//! thread count: paths are generated in fixed-size blocks, each driven by
//! an RNG stream forked deterministically from the run seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;

pub use mc::{
    aggregate, ConfigError, EngineError, MonteCarloSimulator, PathEnsemble, SimulationConfig,
    SimulationOutput, SummaryFrame, SummaryRow,
};
