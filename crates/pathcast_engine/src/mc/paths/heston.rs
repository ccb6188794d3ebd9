//! Heston stochastic volatility path generation.
//!
//! Euler-Maruyama stepping with the full-truncation scheme of
//! Lord, Koekkoek & van Dijk: the recursion advances an unbounded
//! auxiliary variance, but every square root and mean-reversion gap sees
//! the clamped value `max(v, 0)`, so the discretised process can never
//! feed a negative variance into a square root. The variance path handed
//! back to the caller is the clamped (effective) one and is non-negative
//! at every step.
//!
//! Price and variance innovations are correlated at `rho` through the
//! 2x2 Cholesky construction in
//! [`SimRng::fill_correlated_normal`](pathcast_core::SimRng::fill_correlated_normal).

use pathcast_core::{CancelToken, SimRng};
use pathcast_models::HestonParams;

use crate::mc::ensemble::PathEnsemble;
use crate::mc::error::EngineError;

/// Co-indexed price and variance ensembles from one Heston run.
///
/// Row `p` of `variances` is the instantaneous-variance trajectory that
/// drove row `p` of `prices`.
#[derive(Clone, Debug, PartialEq)]
pub struct HestonPaths {
    /// Simulated price paths.
    pub prices: PathEnsemble,
    /// Clamped variance paths (non-negative at every step).
    pub variances: PathEnsemble,
}

/// Generates a Heston path ensemble.
///
/// Row 0 of both matrices holds the initial state `(s0, v0)`; stepping
/// proceeds time-major because each step depends on the previous one.
///
/// # Errors
///
/// [`EngineError::Cancelled`] if `cancel` fires between time steps.
pub fn generate(
    params: &HestonParams,
    n_paths: usize,
    n_steps: usize,
    dt: f64,
    rng: &mut SimRng,
    cancel: &CancelToken,
) -> Result<HestonPaths, EngineError> {
    let mut prices = PathEnsemble::zeroed(n_paths, n_steps);
    let mut variances = PathEnsemble::zeroed(n_paths, n_steps);

    // Unbounded auxiliary variance driving the recursion; the stored
    // path is its clamped image.
    let mut v_raw = vec![params.v0; n_paths];

    for path in 0..n_paths {
        prices.set(path, 0, params.s0);
        variances.set(path, 0, params.v0);
    }

    let mut z1 = vec![0.0; n_paths];
    let mut z2 = vec![0.0; n_paths];

    for step in 1..n_steps {
        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        rng.fill_correlated_normal(params.rho, &mut z1, &mut z2);

        for path in 0..n_paths {
            let v_prev = v_raw[path].max(0.0);
            let vol_sqrt_dt = (v_prev * dt).sqrt();

            let v_next = v_raw[path]
                + params.kappa * (params.theta - v_prev) * dt
                + params.xi * vol_sqrt_dt * z2[path];
            let s_next = prices.value(path, step - 1)
                * ((params.mu - 0.5 * v_prev) * dt + vol_sqrt_dt * z1[path]).exp();

            v_raw[path] = v_next;
            variances.set(path, step, v_next.max(0.0));
            prices.set(path, step, s_next);
        }
    }

    Ok(HestonPaths { prices, variances })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn default_params() -> HestonParams {
        HestonParams::new(100.0, 0.04, 0.05, 1.5, 0.04, 0.3, -0.7).unwrap()
    }

    fn run(params: &HestonParams, n_paths: usize, n_steps: usize, seed: u64) -> HestonPaths {
        let mut rng = SimRng::from_seed(seed);
        generate(
            params,
            n_paths,
            n_steps,
            1.0 / 252.0,
            &mut rng,
            &CancelToken::new(),
        )
        .unwrap()
    }

    #[test]
    fn output_shapes_are_co_indexed() {
        let paths = run(&default_params(), 13, 100, 42);
        assert_eq!(paths.prices.n_paths(), 13);
        assert_eq!(paths.prices.n_steps(), 100);
        assert_eq!(paths.variances.n_paths(), 13);
        assert_eq!(paths.variances.n_steps(), 100);
    }

    #[test]
    fn single_path_shape_is_one_by_n_steps() {
        let paths = run(&default_params(), 1, 64, 42);
        assert_eq!(paths.prices.n_paths(), 1);
        assert_eq!(paths.prices.n_steps(), 64);
    }

    #[test]
    fn row_zero_holds_the_initial_state() {
        let paths = run(&default_params(), 4, 10, 42);
        for p in 0..4 {
            assert_eq!(paths.prices.value(p, 0), 100.0);
            assert_eq!(paths.variances.value(p, 0), 0.04);
        }
    }

    #[test]
    fn zero_vol_of_vol_gives_deterministic_variance() {
        // With xi = 0 the variance recursion is pure mean reversion:
        // v_t = v_{t-1} + kappa * (theta - v_{t-1}) * dt.
        let params = HestonParams::new(100.0, 0.09, 0.05, 2.0, 0.04, 0.0, 0.0).unwrap();
        let dt = 1.0 / 252.0;
        let paths = run(&params, 3, 50, 42);

        let mut expected = 0.09;
        for step in 0..50 {
            for p in 0..3 {
                assert_relative_eq!(paths.variances.value(p, step), expected, max_relative = 1e-12);
            }
            expected += 2.0 * (0.04 - expected) * dt;
        }
    }

    #[test]
    fn prices_stay_positive() {
        // Log-space price update cannot cross zero.
        let paths = run(&default_params(), 200, 252, 9);
        assert!(paths.prices.as_slice().iter().all(|&s| s > 0.0));
    }

    #[test]
    fn all_values_finite_under_stress() {
        // High vol-of-vol with weak reversion drives the raw variance
        // negative often; the clamp must keep everything finite.
        let params = HestonParams::new(100.0, 0.01, 0.0, 0.1, 0.01, 2.0, -0.9).unwrap();
        let paths = run(&params, 500, 252, 3);
        assert!(paths.prices.as_slice().iter().all(|s| s.is_finite()));
        assert!(paths.variances.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn same_seed_reproduces_paths() {
        let a = run(&default_params(), 10, 50, 123);
        let b = run(&default_params(), 10, 50, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn cancelled_token_aborts_the_run() {
        let token = CancelToken::new();
        token.cancel();
        let mut rng = SimRng::from_seed(1);
        let result = generate(&default_params(), 4, 50, 1.0 / 252.0, &mut rng, &token);
        assert_eq!(result.unwrap_err(), EngineError::Cancelled);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        // The clamp invariant: the returned variance path never dips
        // below zero, for any seed and any admissible v0 / xi.
        #[test]
        fn variance_path_is_never_negative(
            seed in any::<u64>(),
            v0 in 0.0..0.5f64,
            xi in 0.0..1.5f64,
        ) {
            let params = HestonParams::new(100.0, v0, 0.05, 1.0, 0.04, xi, -0.5).unwrap();
            let paths = run(&params, 16, 64, seed);
            prop_assert!(paths.variances.as_slice().iter().all(|&v| v >= 0.0));
        }
    }
}
