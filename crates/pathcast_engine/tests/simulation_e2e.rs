//! End-to-end simulation scenarios: configure, run, aggregate.

use approx::assert_relative_eq;

use pathcast_engine::{MonteCarloSimulator, SimulationConfig};
use pathcast_models::{
    GbmParams, HestonParams, ModelError, ModelParams, OrnsteinUhlenbeckParams, ParameterBag,
};

fn simulator(n_paths: usize, horizon_years: f64, seed: u64) -> MonteCarloSimulator {
    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .horizon_years(horizon_years)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloSimulator::new(config).unwrap()
}

#[test]
fn deterministic_gbm_projection_end_to_end() {
    // sigma = 0: every path is S0 * exp(mu * t), so all four statistics
    // collapse to the same strictly increasing deterministic curve.
    let sim = simulator(10, 1.0, 42);
    let params = ModelParams::Gbm(GbmParams::new(100.0, 0.05, 0.0).unwrap());

    let output = sim.run(&params).unwrap();
    let frame = sim.aggregate(output.paths());
    assert_eq!(frame.len(), 252);

    let dt = 1.0 / 252.0;
    let mut previous = 100.0;
    for (k, row) in frame.iter().enumerate() {
        let expected = 100.0 * (0.05 * (k + 1) as f64 * dt).exp();
        assert_relative_eq!(row.mean, expected, max_relative = 1e-12);
        assert_relative_eq!(row.median, expected, max_relative = 1e-12);
        assert_relative_eq!(row.q05, expected, max_relative = 1e-12);
        assert_relative_eq!(row.q95, expected, max_relative = 1e-12);
        assert!(row.mean > previous, "projection must increase at step {}", k);
        previous = row.mean;
    }
}

#[test]
fn stochastic_gbm_bands_are_ordered_and_widen() {
    let sim = simulator(5_000, 1.0, 7);
    let params = ModelParams::Gbm(GbmParams::new(100.0, 0.05, 0.2).unwrap());

    let frame = sim.aggregate(sim.run(&params).unwrap().paths());
    for row in frame.iter() {
        assert!(row.q05 <= row.median && row.median <= row.q95);
    }

    // Uncertainty accumulates: the 5-95 band at the horizon dwarfs the
    // band after the first step.
    let first_band = frame.row(0).q95 - frame.row(0).q05;
    let last_band = frame.row(251).q95 - frame.row(251).q05;
    assert!(last_band > 5.0 * first_band);
}

#[test]
fn heston_end_to_end_keeps_variance_non_negative() {
    let sim = simulator(2_000, 1.0, 11);
    let params =
        ModelParams::Heston(HestonParams::new(100.0, 0.04, 0.05, 1.5, 0.04, 0.9, -0.7).unwrap());

    let output = sim.run(&params).unwrap();
    let variances = output.variances().expect("heston output carries variances");
    assert!(variances.as_slice().iter().all(|&v| v >= 0.0));

    let frame = sim.aggregate(output.paths());
    assert_eq!(frame.len(), 252);
    for row in frame.iter() {
        assert!(row.q05 <= row.median && row.median <= row.q95);
    }
}

#[test]
fn ou_end_to_end_reverts_towards_the_mean() {
    let sim = simulator(5_000, 2.0, 13);
    let params = ModelParams::OrnsteinUhlenbeck(
        OrnsteinUhlenbeckParams::new(1.0, 4.0, 0.2, 0.1).unwrap(),
    );

    let frame = sim.aggregate(sim.run(&params).unwrap().paths());
    assert_eq!(frame.len(), 504);

    // Row 0 is the initial value; the terminal mean sits near the
    // long-run level after eight reversion time constants.
    assert_relative_eq!(frame.row(0).mean, 1.0);
    assert!((frame.row(503).mean - 0.2).abs() < 0.02);
}

#[test]
fn named_run_matches_typed_run() {
    let bag = ParameterBag::new()
        .with("S0", 100.0)
        .with("mu", 0.05)
        .with("sigma", 0.2);
    let typed = ModelParams::Gbm(GbmParams::new(100.0, 0.05, 0.2).unwrap());

    let from_name = simulator(200, 0.5, 3).run_named("gbm", &bag).unwrap();
    let from_params = simulator(200, 0.5, 3).run(&typed).unwrap();
    assert_eq!(from_name, from_params);
}

#[test]
fn unknown_model_name_fails_cleanly() {
    let err = simulator(10, 1.0, 42)
        .run_named("unknown_model", &ParameterBag::new())
        .unwrap_err();
    assert!(matches!(
        err,
        pathcast_engine::EngineError::Model(ModelError::UnsupportedModel { .. })
    ));
}

#[test]
fn missing_sigma_is_reported_by_name() {
    let bag = ParameterBag::new().with("S0", 100.0).with("mu", 0.05);
    let err = simulator(10, 1.0, 42).run_named("gbm", &bag).unwrap_err();
    assert!(err.to_string().contains("sigma"));
}
