//! Greeks command implementation.
//!
//! Prices a barrier option with the analytic engine and estimates its
//! Greeks by bump-and-revalue, printing a one-line summary.

use tracing::info;

use sensi_core::market::MarketSnapshot;
use sensi_core::types::Date;
use sensi_engines::barrier::{AnalyticBarrierEngine, BarrierOption, BarrierType, OptionType};
use sensi_risk::greeks::{BumpConfig, FiniteDifferenceGreeks};

use crate::{CliError, Result};

/// Parsed arguments for the greeks command.
pub struct GreeksArgs {
    pub spot: f64,
    pub rate: f64,
    pub vol: f64,
    pub date: String,
    pub barrier_type: String,
    pub option_type: String,
    pub strike: f64,
    pub barrier: f64,
    pub rebate: f64,
    pub expiry: String,
    pub spot_bump: f64,
    pub rate_bump: f64,
    pub vol_bump: f64,
}

fn parse_barrier_type(s: &str) -> Result<BarrierType> {
    match s {
        "up-in" => Ok(BarrierType::UpIn),
        "up-out" => Ok(BarrierType::UpOut),
        "down-in" => Ok(BarrierType::DownIn),
        "down-out" => Ok(BarrierType::DownOut),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown barrier type: {}. Supported: up-in, up-out, down-in, down-out",
            other
        ))),
    }
}

fn parse_option_type(s: &str) -> Result<OptionType> {
    match s {
        "call" => Ok(OptionType::Call),
        "put" => Ok(OptionType::Put),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown option type: {}. Supported: call, put",
            other
        ))),
    }
}

/// Run the greeks command
pub fn run(args: GreeksArgs) -> Result<()> {
    let valuation_date = Date::parse(&args.date)?;
    let expiry = Date::parse(&args.expiry)?;
    let barrier_type = parse_barrier_type(&args.barrier_type)?;
    let option_type = parse_option_type(&args.option_type)?;

    info!("Estimating barrier option Greeks...");
    info!("  Option: {:?} {:?}", barrier_type, option_type);
    info!(
        "  Strike: {}, Barrier: {}, Rebate: {}, Expiry: {}",
        args.strike, args.barrier, args.rebate, expiry
    );
    info!(
        "  Market: spot {}, rate {}, vol {}, valued {}",
        args.spot, args.rate, args.vol, valuation_date
    );

    let option = BarrierOption::new(
        barrier_type,
        option_type,
        args.strike,
        args.barrier,
        args.rebate,
        expiry,
    );
    let engine = AnalyticBarrierEngine::new(option)?;
    let market = MarketSnapshot::new(args.spot, args.rate, args.vol, valuation_date);

    let estimator = FiniteDifferenceGreeks::new(BumpConfig {
        spot_bump: args.spot_bump,
        rate_bump: args.rate_bump,
        vol_bump: args.vol_bump,
        theta_days: 1,
    });
    let report = estimator.estimate(&engine, &market)?;

    println!("{}", report);

    info!("Estimation complete");
    Ok(())
}
