//! # sensi_risk: Finite-Difference Sensitivity Estimation
//!
//! ## Risk Layer Role
//!
//! Computes bump-and-revalue Greeks for any
//! [`ValuationOracle`](sensi_core::ValuationOracle) without requiring
//! closed-form derivatives:
//!
//! - Delta and Gamma: central difference on spot
//! - Vega: forward difference on volatility
//! - Rho: forward difference on the flat rate
//! - Theta: one-calendar-day advance of the valuation date
//!
//! Every bumped scenario is an immutable copy of the input
//! [`MarketSnapshot`](sensi_core::MarketSnapshot); the caller's snapshot is
//! never mutated, on any exit path.
//!
//! ## Usage
//!
//! ```
//! use sensi_core::market::MarketSnapshot;
//! use sensi_core::traits::ValuationOracle;
//! use sensi_core::types::{Date, PricingError};
//! use sensi_risk::greeks::FiniteDifferenceGreeks;
//!
//! struct Forward;
//!
//! impl ValuationOracle<f64> for Forward {
//!     fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
//!         Ok(market.spot - 90.0)
//!     }
//! }
//!
//! let market = MarketSnapshot::new(100.0, 0.0, 0.2, Date::from_ymd(2020, 2, 28).unwrap());
//! let report = FiniteDifferenceGreeks::default().estimate(&Forward, &market).unwrap();
//! assert!((report.delta - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod greeks;

pub use error::GreeksError;
pub use greeks::{BumpConfig, FiniteDifferenceGreeks, GreeksReport};
