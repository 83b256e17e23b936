//! Sensi CLI - Command Line Greeks Estimation
//!
//! Operational entry point for the sensi-rust sensitivity library.
//!
//! # Commands
//!
//! - `sensi greeks` - Price a barrier option and estimate its Greeks by
//!   bump-and-revalue, printing a one-line summary
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wires the pricing
//! layer (`sensi_engines`) into the risk layer (`sensi_risk`) behind a
//! command-line surface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Sensi sensitivity library CLI
#[derive(Parser)]
#[command(name = "sensi")]
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
    /// Estimate barrier option Greeks by bump-and-revalue
    Greeks {
        /// Underlying spot price
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Flat continuously-compounded risk-free rate
        #[arg(long, default_value = "0.01")]
        rate: f64,

        /// Flat Black volatility
        #[arg(long, default_value = "0.30")]
        vol: f64,

        /// Valuation date (YYYY-MM-DD)
        #[arg(long, default_value = "2020-02-28")]
        date: String,

        /// Barrier type (up-in, up-out, down-in, down-out)
        #[arg(long, default_value = "up-out")]
        barrier_type: String,

        /// Option side (call, put)
        #[arg(long, default_value = "call")]
        option_type: String,

        /// Strike price
        #[arg(long, default_value = "100.0")]
        strike: f64,

        /// Barrier level
        #[arg(long, default_value = "150.0")]
        barrier: f64,

        /// Rebate paid on knock-out (at hit) or failed knock-in (at expiry)
        #[arg(long, default_value = "50.0")]
        rebate: f64,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long, default_value = "2024-02-29")]
        expiry: String,

        /// Central-difference spot bump for delta/gamma
        #[arg(long, default_value = "0.01")]
        spot_bump: f64,

        /// Forward-difference rate bump for rho
        #[arg(long, default_value = "0.0001")]
        rate_bump: f64,

        /// Forward-difference vol bump for vega
        #[arg(long, default_value = "0.0001")]
        vol_bump: f64,
    },
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
        Commands::Greeks {
            spot,
            rate,
            vol,
            date,
            barrier_type,
            option_type,
            strike,
            barrier,
            rebate,
            expiry,
            spot_bump,
            rate_bump,
            vol_bump,
        } => commands::greeks::run(commands::greeks::GreeksArgs {
            spot,
            rate,
            vol,
            date,
            barrier_type,
            option_type,
            strike,
            barrier,
            rebate,
            expiry,
            spot_bump,
            rate_bump,
            vol_bump,
        }),
    }
}
