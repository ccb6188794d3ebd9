//! # Pathcast Models (model layer)
//!
//! Parameter types for the stochastic processes the engine can simulate:
//! - Geometric Brownian Motion ([`GbmParams`])
//! - Heston stochastic volatility ([`HestonParams`])
//! - Ornstein-Uhlenbeck mean reversion ([`OrnsteinUhlenbeckParams`])
//!
//! Every parameter set is validated at construction, so the simulation
//! layer never has to re-check domains deep inside a path loop. The
//! [`ParameterBag`] type bridges dynamic callers (CLI flags, JSON files)
//! into the tagged [`ModelParams`] union, surfacing missing or out-of-range
//! fields as structured [`ModelError`]s at the boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bag;
mod error;
mod kind;
mod params;

pub use bag::ParameterBag;
pub use error::ModelError;
pub use kind::ModelKind;
pub use params::{GbmParams, HestonParams, ModelParams, OrnsteinUhlenbeckParams};
