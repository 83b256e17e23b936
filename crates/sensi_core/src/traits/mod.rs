//! The valuation seam between instruments/engines and risk estimation.

use crate::market::MarketSnapshot;
use crate::types::PricingError;
use num_traits::Float;

/// Trait for anything that can produce a present value from a market snapshot.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Contract
///
/// `value` must be a pure function of `self` and the snapshot: deterministic,
/// no side effects, no hidden state. Risk estimators rely on this to
/// re-evaluate the same oracle under bumped copies of the snapshot and
/// combine the results; an oracle that accumulates state across calls will
/// produce meaningless sensitivities.
///
/// # Examples
///
/// ```
/// use sensi_core::market::MarketSnapshot;
/// use sensi_core::traits::ValuationOracle;
/// use sensi_core::types::{Date, PricingError};
///
/// /// A forward contract struck at K: PV = spot - K (zero rates aside).
/// struct Forward {
///     strike: f64,
/// }
///
/// impl ValuationOracle<f64> for Forward {
///     fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
///         Ok(market.spot - self.strike)
///     }
/// }
///
/// let today = Date::from_ymd(2020, 2, 28).unwrap();
/// let market = MarketSnapshot::new(100.0, 0.0, 0.0, today);
/// let pv = Forward { strike: 90.0 }.value(&market).unwrap();
/// assert_eq!(pv, 10.0);
/// ```
pub trait ValuationOracle<T: Float> {
    /// Calculate the present value under the given market snapshot.
    ///
    /// # Returns
    /// The present value, or `PricingError` if the snapshot or the
    /// instrument parameters do not admit a valuation.
    fn value(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Date;

    struct Constant(f64);

    impl ValuationOracle<f64> for Constant {
        fn value(&self, _market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_oracle_static_dispatch() {
        let market =
            MarketSnapshot::new(100.0, 0.01, 0.30, Date::from_ymd(2020, 2, 28).unwrap());
        assert_eq!(Constant(42.0).value(&market).unwrap(), 42.0);
    }
}
