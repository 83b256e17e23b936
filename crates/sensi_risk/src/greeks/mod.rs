//! Bump-and-revalue Greeks estimation.
//!
//! Provides [`FiniteDifferenceGreeks`], which computes a bundle of risk
//! sensitivities for any [`ValuationOracle`] by re-evaluating it under
//! bumped copies of a [`MarketSnapshot`] and combining the results with
//! standard finite-difference stencils.
//!
//! Perturbation sizes are fixed constants, not adaptively chosen; no
//! Richardson extrapolation or step-size search is performed. Accuracy is
//! bounded by O(h) truncation error for the forward differences and O(h²)
//! for the central difference, plus floating-point cancellation error that
//! grows as h shrinks.

use num_traits::Float;
use sensi_core::market::MarketSnapshot;
use sensi_core::traits::ValuationOracle;
use std::fmt;

use crate::error::GreeksError;

#[cfg(test)]
mod tests;

/// Perturbation sizes for each finite-difference stencil.
///
/// Defaults match the conventional choices for spot-quoted markets: a one
/// cent spot bump, one basis point rate and vol bumps, and a one-day theta
/// step.
///
/// # Examples
///
/// ```
/// use sensi_risk::greeks::BumpConfig;
///
/// let bumps = BumpConfig::<f64>::default();
/// assert_eq!(bumps.spot_bump, 0.01);
/// assert_eq!(bumps.rate_bump, 1e-4);
/// assert_eq!(bumps.vol_bump, 1e-4);
/// assert_eq!(bumps.theta_days, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpConfig<T: Float> {
    /// Central-difference step for delta and gamma.
    pub spot_bump: T,
    /// Forward-difference step for rho.
    pub rate_bump: T,
    /// Forward-difference step for vega.
    pub vol_bump: T,
    /// Calendar days to advance the valuation date for theta.
    pub theta_days: i64,
}

impl<T: Float> Default for BumpConfig<T> {
    fn default() -> Self {
        Self {
            spot_bump: T::from(0.01).unwrap(),
            rate_bump: T::from(1e-4).unwrap(),
            vol_bump: T::from(1e-4).unwrap(),
            theta_days: 1,
        }
    }
}

impl<T: Float> BumpConfig<T> {
    /// Check that every perturbation is usable.
    ///
    /// Each bump must be finite and strictly positive (a zero bump would
    /// divide by zero; a negative vol bump could push the volatility below
    /// zero), and the theta step must be at least one day.
    pub fn validate(&self) -> Result<(), GreeksError> {
        for (quantity, value) in [
            ("spot", self.spot_bump),
            ("rate", self.rate_bump),
            ("vol", self.vol_bump),
        ] {
            if !value.is_finite() || value <= T::zero() {
                return Err(GreeksError::InvalidBump {
                    quantity,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if self.theta_days < 1 {
            return Err(GreeksError::InvalidThetaStep(self.theta_days));
        }
        Ok(())
    }
}

/// Immutable bundle of price and first/second-order sensitivities.
///
/// Produced once per estimation call. Non-finite oracle values propagate
/// into the affected entries as NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksReport<T: Float> {
    /// Present value at the unbumped snapshot.
    pub price: T,
    /// ∂V/∂S: sensitivity to a unit change in spot.
    pub delta: T,
    /// ∂²V/∂S²: sensitivity of delta to a unit change in spot.
    pub gamma: T,
    /// ∂V/∂σ: sensitivity to a unit change in volatility.
    pub vega: T,
    /// Sensitivity to the passage of one day of calendar time, per year.
    pub theta: T,
    /// ∂V/∂r: sensitivity to a unit change in the risk-free rate.
    pub rho: T,
}

impl<T: Float + fmt::Display> fmt::Display for GreeksReport<T> {
    /// Formats the report as the single summary line used by the CLI.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OptionPrice: {:.2}, Delta: {:.2}, Gamma: {:.4}, Theta: {:.2}, Vega: {:.2}, Rho: {:.2}",
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho
        )
    }
}

/// Bump-and-revalue Greeks estimator.
///
/// Performs a strictly sequential sequence of oracle evaluations:
///
/// 1. Baseline `P0` at the unbumped snapshot.
/// 2. Spot up / spot down (central): delta `(P+ - P-) / 2h`,
///    gamma `(P+ - 2 P0 + P-) / h²`.
/// 3. Rate up (forward): rho `(Pr - P0) / h_r`.
/// 4. Vol up (forward): vega `(Pv - P0) / h_v`.
/// 5. Valuation date advanced by `theta_days` calendar days:
///    theta `(P1 - P0) / Δt` with `Δt = days / 365`.
///
/// The input snapshot is shared immutably, so repeated calls under an
/// unchanged market yield identical reports.
///
/// # Examples
///
/// ```
/// use sensi_core::market::MarketSnapshot;
/// use sensi_core::traits::ValuationOracle;
/// use sensi_core::types::{Date, PricingError};
/// use sensi_risk::greeks::{BumpConfig, FiniteDifferenceGreeks};
///
/// struct Quadratic;
///
/// impl ValuationOracle<f64> for Quadratic {
///     fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
///         Ok(0.5 * market.spot * market.spot)
///     }
/// }
///
/// let market = MarketSnapshot::new(10.0, 0.0, 0.2, Date::from_ymd(2020, 2, 28).unwrap());
/// let report = FiniteDifferenceGreeks::new(BumpConfig::default())
///     .estimate(&Quadratic, &market)
///     .unwrap();
/// // The central stencil is exact for quadratics: delta = S, gamma = 1.
/// assert!((report.delta - 10.0).abs() < 1e-6);
/// assert!((report.gamma - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FiniteDifferenceGreeks<T: Float> {
    /// Perturbation sizes for each stencil.
    pub bumps: BumpConfig<T>,
}

impl<T: Float> Default for FiniteDifferenceGreeks<T> {
    fn default() -> Self {
        Self {
            bumps: BumpConfig::default(),
        }
    }
}

impl<T: Float> FiniteDifferenceGreeks<T> {
    /// Create an estimator with the given perturbation sizes.
    pub fn new(bumps: BumpConfig<T>) -> Self {
        Self { bumps }
    }

    /// Estimate price and Greeks for the oracle at the given snapshot.
    ///
    /// Bump sizes are validated before any oracle call; an invalid
    /// configuration never triggers an evaluation. Any oracle failure
    /// aborts the whole estimation.
    ///
    /// # Errors
    ///
    /// * [`GreeksError::InvalidBump`] / [`GreeksError::InvalidThetaStep`] -
    ///   a perturbation size is unusable
    /// * [`GreeksError::Evaluation`] - the oracle failed under the base or
    ///   a bumped snapshot
    pub fn estimate<O>(
        &self,
        oracle: &O,
        market: &MarketSnapshot<T>,
    ) -> Result<GreeksReport<T>, GreeksError>
    where
        O: ValuationOracle<T>,
    {
        self.bumps.validate()?;

        let two = T::from(2.0).unwrap();

        let p0 = oracle.value(market)?;

        // Delta / Gamma: central difference on spot.
        let h = self.bumps.spot_bump;
        let p_up = oracle.value(&market.with_spot(market.spot + h))?;
        let p_down = oracle.value(&market.with_spot(market.spot - h))?;
        let delta = (p_up - p_down) / (two * h);
        let gamma = (p_up - two * p0 + p_down) / (h * h);

        // Rho: forward difference on the flat rate.
        let h_r = self.bumps.rate_bump;
        let p_rate = oracle.value(&market.with_rate(market.rate + h_r))?;
        let rho = (p_rate - p0) / h_r;

        // Vega: forward difference on volatility.
        let h_v = self.bumps.vol_bump;
        let p_vol = oracle.value(&market.with_vol(market.vol + h_v))?;
        let vega = (p_vol - p0) / h_v;

        // Theta: advance the valuation date and re-evaluate.
        let days = self.bumps.theta_days;
        let advanced = market.valuation_date.add_days(days);
        let p_fwd = oracle.value(&market.with_valuation_date(advanced))?;
        let dt = T::from(days as f64 / 365.0).unwrap();
        let theta = (p_fwd - p0) / dt;

        Ok(GreeksReport {
            price: p0,
            delta,
            gamma,
            vega,
            theta,
            rho,
        })
    }
}
