//! Pathcast CLI - Monte Carlo price-path projection from the command line.
//!
//! # Commands
//!
//! - `pathcast simulate --model gbm -p S0=100 -p mu=0.05 -p sigma=0.2` -
//!   run a simulation and print the aggregated projection
//! - `pathcast models` - list supported models and their parameters
//!
//! # Architecture
//!
//! The service layer of the workspace: it parses flags into a
//! [`pathcast_models::ParameterBag`], hands them to
//! [`pathcast_engine::MonteCarloSimulator`], and renders the resulting
//! summary frame as a table, JSON, or CSV with a projected business-day
//! date column.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Pathcast Monte Carlo projection CLI
#[derive(Parser)]
#[command(name = "pathcast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo simulation and print the aggregated projection
    Simulate {
        /// Model to simulate (gbm, heston, ou)
        #[arg(short, long)]
        model: String,

        /// Model parameter, repeatable (e.g. -p S0=100 -p mu=0.05)
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// JSON file holding a {"name": value, ...} parameter map
        #[arg(long, value_name = "FILE")]
        params_file: Option<String>,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long, default_value_t = 10_000)]
        n_paths: usize,

        /// Projection horizon in years (daily steps)
        #[arg(long, default_value_t = 2.0)]
        horizon_years: f64,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Print at most this many rows (default: all)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List supported models and their required parameters
    Models,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate {
            model,
            params,
            params_file,
            n_paths,
            horizon_years,
            seed,
            format,
            limit,
        } => commands::simulate::run(commands::simulate::SimulateArgs {
            model,
            params,
            params_file,
            n_paths,
            horizon_years,
            seed,
            format,
            limit,
        }),
        Commands::Models => commands::models::run(),
    }
}
