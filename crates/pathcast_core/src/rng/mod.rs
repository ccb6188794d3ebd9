//! Random number generation for Monte Carlo simulation.
//!
//! The engine never touches a global RNG: every simulation owns an explicit
//! [`SimRng`] so that runs are reproducible under a fixed seed and parallel
//! workers can be handed independent child streams via [`SimRng::fork`].

mod prng;

pub use prng::SimRng;
