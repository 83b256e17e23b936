//! Immutable market state.
//!
//! A valuation is a pure function of a [`MarketSnapshot`]: bumped scenarios
//! are modified copies of the snapshot, never in-place mutations of shared
//! quotes. This makes "restore the quote after bumping" unrepresentable.

use crate::types::{Date, PricingError};
use num_traits::Float;

/// An immutable snapshot of the flat market state used for valuation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Fields
///
/// - `spot`: underlying spot price
/// - `rate`: flat continuously-compounded risk-free rate
/// - `vol`: flat Black volatility (annualised)
/// - `valuation_date`: date the valuation is performed on
///
/// # Examples
///
/// ```
/// use sensi_core::market::MarketSnapshot;
/// use sensi_core::types::Date;
///
/// let today = Date::from_ymd(2020, 2, 28).unwrap();
/// let market = MarketSnapshot::new(100.0, 0.01, 0.30, today);
///
/// // Bumps produce copies; the original snapshot is untouched.
/// let up = market.with_spot(market.spot + 0.01);
/// assert_eq!(market.spot, 100.0);
/// assert_eq!(up.spot, 100.01);
/// assert_eq!(up.rate, market.rate);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot<T: Float> {
    /// Underlying spot price.
    pub spot: T,
    /// Flat continuously-compounded risk-free rate.
    pub rate: T,
    /// Flat Black volatility (annualised).
    pub vol: T,
    /// Valuation date.
    pub valuation_date: Date,
}

impl<T: Float> MarketSnapshot<T> {
    /// Create a new market snapshot.
    #[inline]
    pub fn new(spot: T, rate: T, vol: T, valuation_date: Date) -> Self {
        Self {
            spot,
            rate,
            vol,
            valuation_date,
        }
    }

    /// Check that the snapshot is in an evaluable state.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All quotes finite, spot positive, vol non-negative
    /// * `Err(PricingError::InvalidInput)` - Otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::market::MarketSnapshot;
    /// use sensi_core::types::Date;
    ///
    /// let today = Date::from_ymd(2020, 2, 28).unwrap();
    /// assert!(MarketSnapshot::new(100.0, 0.01, 0.30, today).validate().is_ok());
    /// assert!(MarketSnapshot::new(100.0, 0.01, -0.30, today).validate().is_err());
    /// assert!(MarketSnapshot::new(f64::NAN, 0.01, 0.30, today).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= T::zero() {
            return Err(PricingError::InvalidInput(
                "spot must be finite and positive".to_string(),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidInput(
                "rate must be finite".to_string(),
            ));
        }
        if !self.vol.is_finite() || self.vol < T::zero() {
            return Err(PricingError::InvalidInput(
                "vol must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Return a copy with the spot replaced.
    #[inline]
    pub fn with_spot(&self, spot: T) -> Self {
        Self { spot, ..*self }
    }

    /// Return a copy with the rate replaced.
    #[inline]
    pub fn with_rate(&self, rate: T) -> Self {
        Self { rate, ..*self }
    }

    /// Return a copy with the volatility replaced.
    #[inline]
    pub fn with_vol(&self, vol: T) -> Self {
        Self { vol, ..*self }
    }

    /// Return a copy with the valuation date replaced.
    #[inline]
    pub fn with_valuation_date(&self, valuation_date: Date) -> Self {
        Self {
            valuation_date,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MarketSnapshot<f64> {
        MarketSnapshot::new(100.0, 0.01, 0.30, Date::from_ymd(2020, 2, 28).unwrap())
    }

    #[test]
    fn test_validate_accepts_reference_market() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_quotes() {
        assert!(snapshot().with_spot(-1.0).validate().is_err());
        assert!(snapshot().with_spot(0.0).validate().is_err());
        assert!(snapshot().with_rate(f64::INFINITY).validate().is_err());
        assert!(snapshot().with_vol(-0.01).validate().is_err());
        assert!(snapshot().with_vol(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_bumps_do_not_mutate_original() {
        let base = snapshot();
        let _up = base.with_spot(101.0);
        let _dn = base.with_rate(0.02);
        let _v = base.with_vol(0.31);
        let _d = base.with_valuation_date(base.valuation_date.add_days(1));
        assert_eq!(base, snapshot());
    }

    #[test]
    fn test_zero_vol_is_valid() {
        assert!(snapshot().with_vol(0.0).validate().is_ok());
    }
}
