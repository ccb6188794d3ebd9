//! Simulation configuration.
//!
//! [`SimulationConfig`] owns the simulation-wide settings: how many paths
//! to draw, how far into the future to project, the step size, and an
//! optional seed for reproducibility. Instances are built through
//! [`SimulationConfigBuilder`] and validated before the engine accepts
//! them.

use thiserror::Error;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// One trading day in years. Daily stepping is the engine's default grid.
pub const DEFAULT_DT: f64 = 1.0 / 252.0;

/// Default number of simulation paths.
pub const DEFAULT_N_PATHS: usize = 10_000;

/// Default projection horizon in years.
pub const DEFAULT_HORIZON_YEARS: f64 = 2.0;

/// Configuration error for the simulation engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Path count outside `[1, MAX_PATHS]`.
    #[error("invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Horizon is non-positive or non-finite.
    #[error("invalid horizon {0} years: must be positive and finite")]
    InvalidHorizon(f64),

    /// Step size is non-positive or non-finite.
    #[error("invalid step size {0}: must be positive and finite")]
    InvalidStepSize(f64),

    /// Derived step count outside `[1, MAX_STEPS]`.
    #[error("invalid step count {0}: horizon / dt must land in [1, {MAX_STEPS}]")]
    InvalidStepCount(usize),
}

/// Immutable simulation-wide settings.
///
/// # Step count derivation
///
/// `n_steps = trunc(horizon_years / dt)`: when the horizon is not an
/// exact multiple of the step size, the trailing fractional step is
/// dropped, never rounded up. With the default daily grid a 2-year
/// horizon yields 504 steps.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .horizon_years(1.0)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of independent sample paths.
    n_paths: usize,
    /// Projection horizon in years.
    horizon_years: f64,
    /// Time step in years.
    dt: f64,
    /// Optional seed for reproducible runs.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of independent sample paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Projection horizon in years.
    #[inline]
    pub fn horizon_years(&self) -> f64 {
        self.horizon_years
    }

    /// Time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of time steps, `trunc(horizon_years / dt)`.
    #[inline]
    pub fn n_steps(&self) -> usize {
        (self.horizon_years / self.dt) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: path count, horizon, step
    /// size, or derived step count out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(ConfigError::InvalidHorizon(self.horizon_years));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidStepSize(self.dt));
        }
        let n_steps = self.n_steps();
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            horizon_years: DEFAULT_HORIZON_YEARS,
            dt: DEFAULT_DT,
            seed: None,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to the defaults: 10 000 paths, a 2-year
/// horizon, daily steps, no seed.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    horizon_years: Option<f64>,
    dt: Option<f64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of paths.
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the projection horizon in years.
    pub fn horizon_years(mut self, horizon_years: f64) -> Self {
        self.horizon_years = Some(horizon_years);
        self
    }

    /// Sets the time step in years.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any setting is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_N_PATHS),
            horizon_years: self.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS),
            dt: self.dt.unwrap_or(DEFAULT_DT),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.horizon_years(), 2.0);
        assert_eq!(config.dt(), 1.0 / 252.0);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn one_year_daily_grid_has_252_steps() {
        let config = SimulationConfig::builder()
            .horizon_years(1.0)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 252);
    }

    #[test]
    fn two_year_daily_grid_has_504_steps() {
        let config = SimulationConfig::default();
        assert_eq!(config.n_steps(), 504);
    }

    #[test]
    fn fractional_final_step_is_truncated() {
        // 0.5 years at dt = 0.4: 1.25 steps -> 1, not 2.
        let config = SimulationConfig::builder()
            .n_paths(10)
            .horizon_years(0.5)
            .dt(0.4)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 1);
    }

    #[test]
    fn zero_paths_rejected() {
        let err = SimulationConfig::builder().n_paths(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPathCount(0));
    }

    #[test]
    fn oversized_path_count_rejected() {
        let err = SimulationConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPathCount(_)));
    }

    #[test]
    fn non_positive_horizon_rejected() {
        let err = SimulationConfig::builder()
            .horizon_years(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHorizon(_)));

        let err = SimulationConfig::builder()
            .horizon_years(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHorizon(_)));
    }

    #[test]
    fn non_positive_dt_rejected() {
        let err = SimulationConfig::builder().dt(-0.1).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStepSize(_)));
    }

    #[test]
    fn horizon_shorter_than_one_step_rejected() {
        let err = SimulationConfig::builder()
            .horizon_years(0.001)
            .dt(0.5)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidStepCount(0));
    }

    #[test]
    fn config_error_messages_are_descriptive() {
        assert!(ConfigError::InvalidPathCount(0)
            .to_string()
            .contains("path count 0"));
        assert!(ConfigError::InvalidStepCount(0)
            .to_string()
            .contains("horizon / dt"));
    }
}
