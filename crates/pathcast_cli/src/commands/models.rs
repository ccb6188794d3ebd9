//! Models command implementation.
//!
//! Prints the supported models and the parameters each one requires.

use pathcast_models::ModelKind;

use crate::Result;

/// Run the models command
pub fn run() -> Result<()> {
    for kind in ModelKind::all() {
        let (description, fields) = describe(kind);
        println!("{:<8} {}", kind.as_str(), description);
        println!("         parameters: {}", fields.join(", "));
    }
    Ok(())
}

fn describe(kind: ModelKind) -> (&'static str, Vec<&'static str>) {
    match kind {
        ModelKind::Gbm => (
            "Geometric Brownian Motion (exact log-space simulation)",
            vec!["S0", "mu", "sigma"],
        ),
        ModelKind::Heston => (
            "Heston stochastic volatility (full-truncation Euler-Maruyama)",
            vec!["S0", "v0", "mu", "kappa", "theta", "xi", "rho"],
        ),
        ModelKind::OrnsteinUhlenbeck => (
            "Ornstein-Uhlenbeck mean reversion (Euler-Maruyama)",
            vec!["X0", "theta", "mu", "sigma"],
        ),
    }
}
