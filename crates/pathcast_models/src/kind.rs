//! Model discriminant and name parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The stochastic processes the engine knows how to simulate.
///
/// Dispatch over models is static (a `match` on this enum); there are no
/// trait objects anywhere in the simulation path.
///
/// # Examples
///
/// ```rust
/// use pathcast_models::ModelKind;
///
/// let kind: ModelKind = "heston".parse().unwrap();
/// assert_eq!(kind, ModelKind::Heston);
/// assert_eq!(kind.as_str(), "heston");
///
/// assert!("garch".parse::<ModelKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelKind {
    /// Geometric Brownian Motion (log-normal price model).
    Gbm,
    /// Heston stochastic volatility.
    Heston,
    /// Ornstein-Uhlenbeck mean reversion.
    OrnsteinUhlenbeck,
}

impl ModelKind {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Gbm => "gbm",
            ModelKind::Heston => "heston",
            ModelKind::OrnsteinUhlenbeck => "ou",
        }
    }

    /// All supported kinds, in display order.
    pub fn all() -> [ModelKind; 3] {
        [ModelKind::Gbm, ModelKind::Heston, ModelKind::OrnsteinUhlenbeck]
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gbm" => Ok(ModelKind::Gbm),
            "heston" => Ok(ModelKind::Heston),
            "ou" => Ok(ModelKind::OrnsteinUhlenbeck),
            other => Err(ModelError::UnsupportedModel {
                name: other.to_string(),
            }),
        }
    }
}
