//! Simulate command implementation.
//!
//! Builds a parameter bag from flags and/or a JSON file, runs the engine,
//! aggregates, and renders the projection with a business-day date column
//! starting from today.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use tracing::info;

use pathcast_engine::{
    EngineError, MonteCarloSimulator, SimulationConfig, SummaryFrame,
};
use pathcast_models::ParameterBag;

use crate::{CliError, Result};

/// Flags collected from the `simulate` subcommand.
pub struct SimulateArgs {
    /// Model name (gbm, heston, ou).
    pub model: String,
    /// `NAME=VALUE` parameter overrides.
    pub params: Vec<String>,
    /// Optional JSON parameter file.
    pub params_file: Option<String>,
    /// Number of Monte Carlo paths.
    pub n_paths: usize,
    /// Projection horizon in years.
    pub horizon_years: f64,
    /// Optional seed.
    pub seed: Option<u64>,
    /// Output format (table, json, csv).
    pub format: String,
    /// Row cap for output.
    pub limit: Option<usize>,
}

/// Run the simulate command
pub fn run(args: SimulateArgs) -> Result<()> {
    info!("Starting simulation...");
    info!("  Model: {}", args.model);
    info!("  Monte Carlo paths: {}", args.n_paths);
    info!("  Horizon: {} years", args.horizon_years);

    let bag = build_bag(args.params_file.as_deref(), &args.params)?;

    let mut builder = SimulationConfig::builder()
        .n_paths(args.n_paths)
        .horizon_years(args.horizon_years);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().map_err(EngineError::from)?;

    let simulator = MonteCarloSimulator::new(config).map_err(EngineError::from)?;
    let output = simulator.run_named(&args.model, &bag)?;
    let frame = simulator.aggregate(output.paths());
    let dates = projection_dates(frame.len());

    let shown = args.limit.unwrap_or(frame.len()).min(frame.len());
    match args.format.as_str() {
        "table" => render_table(&frame, &dates, shown),
        "json" => render_json(&frame, &dates, shown)?,
        "csv" => render_csv(&frame, &dates, shown),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }

    info!("Simulation complete");
    Ok(())
}

/// Merges the JSON parameter file (if any) with `NAME=VALUE` overrides.
fn build_bag(params_file: Option<&str>, overrides: &[String]) -> Result<ParameterBag> {
    let mut bag: ParameterBag = match params_file {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ParameterBag::new(),
    };

    for spec in overrides {
        let (name, value) = spec.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!("expected NAME=VALUE, got '{}'", spec))
        })?;
        let value: f64 = value.parse().map_err(|_| {
            CliError::InvalidArgument(format!("parameter '{}' has non-numeric value '{}'", name, value))
        })?;
        bag.insert(name, value);
    }
    Ok(bag)
}

/// Future business days (Mon-Fri), starting tomorrow.
fn projection_dates(n: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n);
    let mut day = Local::now().date_naive();
    while dates.len() < n {
        day += Duration::days(1);
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(day);
        }
    }
    dates
}

fn render_table(frame: &SummaryFrame, dates: &[NaiveDate], shown: usize) {
    println!("┌────────────┬────────────┬────────────┬────────────┬────────────┐");
    println!("│ Date       │ Mean       │ Median     │ Q05        │ Q95        │");
    println!("├────────────┼────────────┼────────────┼────────────┼────────────┤");
    for (date, row) in dates.iter().zip(frame.iter()).take(shown) {
        println!(
            "│ {} │ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
            date, row.mean, row.median, row.q05, row.q95
        );
    }
    println!("└────────────┴────────────┴────────────┴────────────┴────────────┘");
    if shown < frame.len() {
        println!("({} of {} rows shown)", shown, frame.len());
    }
}

fn render_json(frame: &SummaryFrame, dates: &[NaiveDate], shown: usize) -> Result<()> {
    let rows: Vec<serde_json::Value> = dates
        .iter()
        .zip(frame.iter())
        .take(shown)
        .map(|(date, row)| {
            serde_json::json!({
                "date": date.to_string(),
                "mean": row.mean,
                "median": row.median,
                "q05": row.q05,
                "q95": row.q95,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn render_csv(frame: &SummaryFrame, dates: &[NaiveDate], shown: usize) {
    println!("date,mean,median,q05,q95");
    for (date, row) in dates.iter().zip(frame.iter()).take(shown) {
        println!(
            "{},{:.6},{:.6},{:.6},{:.6}",
            date, row.mean, row.median, row.q05, row.q95
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bag_parses_overrides() {
        let bag = build_bag(None, &["S0=100".to_string(), "mu=0.05".to_string()]).unwrap();
        assert_eq!(bag.get("S0"), Some(100.0));
        assert_eq!(bag.get("mu"), Some(0.05));
    }

    #[test]
    fn build_bag_rejects_malformed_spec() {
        let err = build_bag(None, &["S0".to_string()]).unwrap_err();
        assert!(err.to_string().contains("NAME=VALUE"));
    }

    #[test]
    fn build_bag_rejects_non_numeric_value() {
        let err = build_bag(None, &["S0=abc".to_string()]).unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn projection_dates_skip_weekends() {
        let dates = projection_dates(30);
        assert_eq!(dates.len(), 30);
        assert!(dates
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
        // Strictly increasing.
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
