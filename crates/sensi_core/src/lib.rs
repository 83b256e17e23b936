//! # sensi_core: Foundation for the sensi-rust sensitivity library
//!
//! ## Foundation Layer Role
//!
//! sensi_core serves as the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - Immutable market state: `MarketSnapshot` (`market`)
//! - The valuation seam: `ValuationOracle` (`traits`)
//! - Shared numerics: `math::norm_cdf`
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other sensi_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sensi_core::market::MarketSnapshot;
//! use sensi_core::types::Date;
//!
//! let today = Date::from_ymd(2020, 2, 28).unwrap();
//! let market = MarketSnapshot::new(100.0, 0.01, 0.30, today);
//! assert!(market.validate().is_ok());
//!
//! // Bumped scenarios are modified copies, never mutations.
//! let bumped = market.with_spot(100.01);
//! assert_eq!(market.spot, 100.0);
//! assert_eq!(bumped.spot, 100.01);
//! ```

pub mod market;
pub mod math;
pub mod traits;
pub mod types;

pub use market::MarketSnapshot;
pub use traits::ValuationOracle;
pub use types::{Date, DayCountConvention, DateError, PricingError};
