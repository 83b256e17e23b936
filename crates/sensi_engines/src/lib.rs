//! # sensi_engines: Closed-Form Valuation Engines
//!
//! ## Pricing Layer Role
//!
//! Concrete [`ValuationOracle`](sensi_core::ValuationOracle) implementations.
//! Risk estimators in `sensi_risk` are written against the oracle trait and
//! never depend on this crate; it exists so that demos and end-to-end tests
//! have a real engine to evaluate.
//!
//! Currently provided:
//! - [`barrier::AnalyticBarrierEngine`]: Reiner-Rubinstein/Haug closed-form
//!   valuation of single-barrier options under Black-Scholes
//! - [`vanilla::black_price`]: Black-Scholes vanilla valuation

pub mod barrier;
pub mod vanilla;

pub use barrier::{AnalyticBarrierEngine, BarrierOption, BarrierType, OptionType};
