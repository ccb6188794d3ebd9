//! Ornstein-Uhlenbeck path generation.
//!
//! Euler-Maruyama stepping of the mean-reverting process
//! ```text
//! X_t = X_{t-1} + theta * (mu - X_{t-1}) * dt + sigma * sqrt(dt) * z
//! ```
//! There is no positivity constraint: the process models quantities such
//! as spreads or log-volatility factors and is allowed to go negative.

use pathcast_core::{CancelToken, SimRng};
use pathcast_models::OrnsteinUhlenbeckParams;

use crate::mc::ensemble::PathEnsemble;
use crate::mc::error::EngineError;

/// Generates an Ornstein-Uhlenbeck path ensemble.
///
/// Row 0 holds the initial value `x0`; stepping proceeds time-major
/// because each step depends on the previous one.
///
/// # Errors
///
/// [`EngineError::Cancelled`] if `cancel` fires between time steps.
pub fn generate(
    params: &OrnsteinUhlenbeckParams,
    n_paths: usize,
    n_steps: usize,
    dt: f64,
    rng: &mut SimRng,
    cancel: &CancelToken,
) -> Result<PathEnsemble, EngineError> {
    let mut ensemble = PathEnsemble::zeroed(n_paths, n_steps);
    for path in 0..n_paths {
        ensemble.set(path, 0, params.x0);
    }

    let vol_sqrt_dt = params.sigma * dt.sqrt();
    let mut z = vec![0.0; n_paths];

    for step in 1..n_steps {
        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        rng.fill_normal(&mut z);

        for path in 0..n_paths {
            let x_prev = ensemble.value(path, step - 1);
            let x_next = x_prev + params.theta * (params.mu - x_prev) * dt + vol_sqrt_dt * z[path];
            ensemble.set(path, step, x_next);
        }
    }

    Ok(ensemble)
}
