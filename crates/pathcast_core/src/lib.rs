//! # Pathcast Core (foundation layer)
//!
//! Shared building blocks for the pathcast simulation engine:
//! - Seeded, forkable random number generation ([`rng::SimRng`])
//! - Cross-sectional statistics (mean, median, interpolated quantiles)
//! - Cooperative cancellation ([`cancel::CancelToken`])
//!
//! This crate has no knowledge of any particular stochastic model; it only
//! provides the numeric plumbing the engine layer builds on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cancel;
pub mod math;
pub mod rng;

pub use cancel::CancelToken;
pub use rng::SimRng;
