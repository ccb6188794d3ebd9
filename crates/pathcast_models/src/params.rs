//! Validated parameter sets, one per stochastic model.
//!
//! Each constructor rejects values outside the model's domain, so a
//! successfully built parameter set can be consumed by the path
//! generators without further checks, and a NaN or out-of-domain value
//! is reported at the boundary instead of surfacing mid-simulation.

use crate::bag::ParameterBag;
use crate::error::ModelError;
use crate::kind::ModelKind;

fn require_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ModelError> {
    let value = require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ModelError> {
    let value = require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    }
}

/// Geometric Brownian Motion parameters.
///
/// The process `dS = mu * S * dt + sigma * S * dW`, simulated exactly in
/// log space.
///
/// # Examples
///
/// ```rust
/// use pathcast_models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.s0, 100.0);
///
/// // Negative volatility is rejected at the boundary.
/// assert!(GbmParams::new(100.0, 0.05, -0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial value (S0 > 0).
    pub s0: f64,
    /// Annualised drift.
    pub mu: f64,
    /// Annualised volatility (sigma >= 0).
    pub sigma: f64,
}

impl GbmParams {
    /// Builds validated GBM parameters.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] if `s0 <= 0`, `sigma < 0`, or any
    /// field is non-finite.
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Result<Self, ModelError> {
        Ok(Self {
            s0: require_positive("S0", s0)?,
            mu: require_finite("mu", mu)?,
            sigma: require_non_negative("sigma", sigma)?,
        })
    }
}

/// Heston stochastic volatility parameters.
///
/// The coupled pair
/// ```text
/// dS = mu * S * dt + sqrt(v) * S * dW_S
/// dv = kappa * (theta - v) * dt + xi * sqrt(v) * dW_v
/// E[dW_S * dW_v] = rho * dt
/// ```
/// discretised with the full-truncation Euler-Maruyama scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HestonParams {
    /// Initial price (S0 > 0).
    pub s0: f64,
    /// Initial instantaneous variance (v0 >= 0).
    pub v0: f64,
    /// Annualised drift of the price process.
    pub mu: f64,
    /// Mean-reversion speed of the variance (kappa >= 0).
    pub kappa: f64,
    /// Long-run variance level (theta >= 0).
    pub theta: f64,
    /// Volatility of variance (xi >= 0).
    pub xi: f64,
    /// Correlation between price and variance innovations (rho in [-1, 1]).
    pub rho: f64,
}

impl HestonParams {
    /// Builds validated Heston parameters.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] if any field is non-finite, a
    /// scale parameter is negative, or `rho` lies outside `[-1, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        s0: f64,
        v0: f64,
        mu: f64,
        kappa: f64,
        theta: f64,
        xi: f64,
        rho: f64,
    ) -> Result<Self, ModelError> {
        let rho = require_finite("rho", rho)?;
        if !(-1.0..=1.0).contains(&rho) {
            return Err(ModelError::InvalidParameter {
                name: "rho",
                value: rho,
                reason: "must lie in [-1, 1]",
            });
        }
        Ok(Self {
            s0: require_positive("S0", s0)?,
            v0: require_non_negative("v0", v0)?,
            mu: require_finite("mu", mu)?,
            kappa: require_non_negative("kappa", kappa)?,
            theta: require_non_negative("theta", theta)?,
            xi: require_non_negative("xi", xi)?,
            rho,
        })
    }

    /// Whether `2 * kappa * theta > xi^2` (the Feller condition).
    ///
    /// Not required by the discretisation (the truncation clamp already
    /// guards the square root) but useful for diagnostics: when it fails,
    /// the continuous-time variance process can touch zero.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.xi * self.xi
    }
}

/// Ornstein-Uhlenbeck parameters.
///
/// The mean-reverting process
/// `dX = theta * (mu - X) * dt + sigma * dW`. The state is unconstrained
/// in sign: the process models quantities such as spreads or log-vol
/// factors, not prices, and is allowed to go negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrnsteinUhlenbeckParams {
    /// Initial value (unconstrained).
    pub x0: f64,
    /// Mean-reversion speed (theta >= 0).
    pub theta: f64,
    /// Long-run mean level (unconstrained).
    pub mu: f64,
    /// Diffusion scale (sigma >= 0).
    pub sigma: f64,
}

impl OrnsteinUhlenbeckParams {
    /// Builds validated Ornstein-Uhlenbeck parameters.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] if any field is non-finite or a
    /// rate/scale parameter is negative.
    pub fn new(x0: f64, theta: f64, mu: f64, sigma: f64) -> Result<Self, ModelError> {
        Ok(Self {
            x0: require_finite("X0", x0)?,
            theta: require_non_negative("theta", theta)?,
            mu: require_finite("mu", mu)?,
            sigma: require_non_negative("sigma", sigma)?,
        })
    }
}

/// Tagged union over all model parameter sets.
///
/// Once a `ModelParams` exists, the matching integrator's inputs are
/// known to be complete and in-domain.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "lowercase"))]
pub enum ModelParams {
    /// Geometric Brownian Motion.
    Gbm(GbmParams),
    /// Heston stochastic volatility.
    Heston(HestonParams),
    /// Ornstein-Uhlenbeck mean reversion.
    #[cfg_attr(feature = "serde", serde(rename = "ou"))]
    OrnsteinUhlenbeck(OrnsteinUhlenbeckParams),
}

impl ModelParams {
    /// The discriminant for this parameter set.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParams::Gbm(_) => ModelKind::Gbm,
            ModelParams::Heston(_) => ModelKind::Heston,
            ModelParams::OrnsteinUhlenbeck(_) => ModelKind::OrnsteinUhlenbeck,
        }
    }

    /// Assembles validated parameters for `kind` from a dynamic bag.
    ///
    /// This is the boundary between dynamically supplied input (CLI
    /// flags, JSON files) and the typed model layer. Field names match
    /// the conventional model notation: `S0`, `mu`, `sigma` for GBM;
    /// `S0`, `v0`, `mu`, `kappa`, `theta`, `xi`, `rho` for Heston;
    /// `X0`, `theta`, `mu`, `sigma` for Ornstein-Uhlenbeck.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MissingParameter`] naming the first absent field.
    /// - [`ModelError::InvalidParameter`] if a present value is out of
    ///   domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathcast_models::{ModelKind, ModelParams, ParameterBag};
    ///
    /// let bag = ParameterBag::new()
    ///     .with("S0", 100.0)
    ///     .with("mu", 0.05)
    ///     .with("sigma", 0.2);
    /// let params = ModelParams::from_bag(ModelKind::Gbm, &bag).unwrap();
    /// assert_eq!(params.kind(), ModelKind::Gbm);
    /// ```
    pub fn from_bag(kind: ModelKind, bag: &ParameterBag) -> Result<Self, ModelError> {
        match kind {
            ModelKind::Gbm => Ok(ModelParams::Gbm(GbmParams::new(
                bag.require(kind, "S0")?,
                bag.require(kind, "mu")?,
                bag.require(kind, "sigma")?,
            )?)),
            ModelKind::Heston => Ok(ModelParams::Heston(HestonParams::new(
                bag.require(kind, "S0")?,
                bag.require(kind, "v0")?,
                bag.require(kind, "mu")?,
                bag.require(kind, "kappa")?,
                bag.require(kind, "theta")?,
                bag.require(kind, "xi")?,
                bag.require(kind, "rho")?,
            )?)),
            ModelKind::OrnsteinUhlenbeck => {
                Ok(ModelParams::OrnsteinUhlenbeck(OrnsteinUhlenbeckParams::new(
                    bag.require(kind, "X0")?,
                    bag.require(kind, "theta")?,
                    bag.require(kind, "mu")?,
                    bag.require(kind, "sigma")?,
                )?))
            }
        }
    }
}
