//! Path generators, one module per stochastic model.
//!
//! All generators are stateless functions of their inputs: parameters,
//! grid dimensions, and an explicit [`SimRng`](pathcast_core::SimRng).
//! Each produces a row-major `n_paths x n_steps` ensemble and checks the
//! supplied cancellation token as it advances, so long-horizon runs can
//! be abandoned cooperatively.
//!
//! Row-0 convention:
//! - GBM rows start at the first simulated step (`t = dt`); the initial
//!   value is not stored.
//! - Heston and Ornstein-Uhlenbeck rows start at the initial state
//!   (`t = 0`), since their recursions seed the first column.

pub mod gbm;
pub mod heston;
pub mod ornstein_uhlenbeck;

pub use heston::HestonPaths;
