//! Analytic single-barrier option valuation.
//!
//! Implements the Reiner-Rubinstein/Haug closed-form formulas for the four
//! standard barrier types under Black-Scholes with a flat
//! continuously-compounded rate and flat volatility:
//!
//! - **Up-and-In**: activates when price crosses barrier from below
//! - **Up-and-Out**: deactivates when price crosses barrier from below
//! - **Down-and-In**: activates when price crosses barrier from above
//! - **Down-and-Out**: deactivates when price crosses barrier from above
//!
//! Rebates are paid at the barrier hit for knock-out options, and at expiry
//! for knock-in options that never activate.

use num_traits::Float;
use sensi_core::market::MarketSnapshot;
use sensi_core::math::norm_cdf;
use sensi_core::traits::ValuationOracle;
use sensi_core::types::{Date, DayCountConvention, PricingError};

use crate::vanilla::black_price;

/// Vanilla option side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

/// Barrier type enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierType {
    /// Up-and-In: activates when price crosses barrier from below
    UpIn,
    /// Up-and-Out: deactivates when price crosses barrier from below
    UpOut,
    /// Down-and-In: activates when price crosses barrier from above
    DownIn,
    /// Down-and-Out: deactivates when price crosses barrier from above
    DownOut,
}

impl BarrierType {
    /// Returns true if this is an "up" barrier (hit from below).
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// Returns true if this is an "in" barrier (knock-in).
    #[inline]
    pub fn is_in(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::DownIn)
    }
}

/// A single-barrier option on a spot underlying.
///
/// # Examples
///
/// ```
/// use sensi_engines::barrier::{BarrierOption, BarrierType, OptionType};
/// use sensi_core::types::Date;
///
/// let expiry = Date::from_ymd(2024, 2, 29).unwrap();
/// let option = BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry);
/// assert_eq!(option.barrier_type, BarrierType::UpOut);
/// assert_eq!(option.option_type, OptionType::Call);
/// assert!(option.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierOption<T: Float> {
    /// Barrier type (Up/Down, In/Out).
    pub barrier_type: BarrierType,
    /// Call or Put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: T,
    /// Barrier level.
    pub barrier: T,
    /// Rebate paid when the option knocks out (at hit) or fails to knock in
    /// (at expiry).
    pub rebate: T,
    /// Expiry date.
    pub expiry: Date,
}

impl<T: Float> BarrierOption<T> {
    /// Creates a new barrier option.
    #[inline]
    pub fn new(
        barrier_type: BarrierType,
        option_type: OptionType,
        strike: T,
        barrier: T,
        rebate: T,
        expiry: Date,
    ) -> Self {
        Self {
            barrier_type,
            option_type,
            strike,
            barrier,
            rebate,
            expiry,
        }
    }

    /// Creates an Up-and-Out call.
    #[inline]
    pub fn up_out_call(strike: T, barrier: T, rebate: T, expiry: Date) -> Self {
        Self::new(BarrierType::UpOut, OptionType::Call, strike, barrier, rebate, expiry)
    }

    /// Creates an Up-and-In call.
    #[inline]
    pub fn up_in_call(strike: T, barrier: T, rebate: T, expiry: Date) -> Self {
        Self::new(BarrierType::UpIn, OptionType::Call, strike, barrier, rebate, expiry)
    }

    /// Creates a Down-and-Out put.
    #[inline]
    pub fn down_out_put(strike: T, barrier: T, rebate: T, expiry: Date) -> Self {
        Self::new(BarrierType::DownOut, OptionType::Put, strike, barrier, rebate, expiry)
    }

    /// Creates a Down-and-In put.
    #[inline]
    pub fn down_in_put(strike: T, barrier: T, rebate: T, expiry: Date) -> Self {
        Self::new(BarrierType::DownIn, OptionType::Put, strike, barrier, rebate, expiry)
    }

    /// Check that the instrument parameters admit a valuation.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= T::zero() {
            return Err(PricingError::InvalidInput(
                "strike must be finite and positive".to_string(),
            ));
        }
        if !self.barrier.is_finite() || self.barrier <= T::zero() {
            return Err(PricingError::InvalidInput(
                "barrier must be finite and positive".to_string(),
            ));
        }
        if !self.rebate.is_finite() || self.rebate < T::zero() {
            return Err(PricingError::InvalidInput(
                "rebate must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Closed-form barrier option engine.
///
/// Valuation conventions:
/// - Times to expiry are measured with a configurable day count
///   (ACT/360 by default, matching money-market quoted flat curves).
/// - The valuation date is rolled to the next weekday before measuring time
///   to expiry; flat curves and volatilities are quoted off that reference
///   date.
/// - If the barrier has already been touched at valuation, knock-out options
///   are worth their rebate and knock-in options collapse to vanillas.
///
/// # Examples
///
/// ```
/// use sensi_core::market::MarketSnapshot;
/// use sensi_core::traits::ValuationOracle;
/// use sensi_core::types::Date;
/// use sensi_engines::barrier::{AnalyticBarrierEngine, BarrierOption};
///
/// let expiry = Date::from_ymd(2024, 2, 29).unwrap();
/// let option = BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry);
/// let engine = AnalyticBarrierEngine::new(option).unwrap();
///
/// let today = Date::from_ymd(2020, 2, 28).unwrap();
/// let market = MarketSnapshot::new(100.0, 0.01, 0.30, today);
/// let pv: f64 = engine.value(&market).unwrap();
/// assert!((pv - 22.0568).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AnalyticBarrierEngine<T: Float> {
    option: BarrierOption<T>,
    day_count: DayCountConvention,
}

impl<T: Float> AnalyticBarrierEngine<T> {
    /// Create an engine for the given option, validating its parameters.
    pub fn new(option: BarrierOption<T>) -> Result<Self, PricingError> {
        option.validate()?;
        Ok(Self {
            option,
            day_count: DayCountConvention::Act360,
        })
    }

    /// Replace the day count convention used for time to expiry.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// The option being priced.
    pub fn option(&self) -> &BarrierOption<T> {
        &self.option
    }

    /// Reiner-Rubinstein valuation for an unhit barrier.
    fn unhit_value(&self, spot: T, rate: T, vol: T, t: T) -> T {
        let opt = &self.option;
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let half = T::from(0.5).unwrap();

        let srt = vol * t.sqrt();
        let df = (-rate * t).exp();
        // Cost of carry equals the rate: no dividend yield.
        let mu = (rate - half * vol * vol) / (vol * vol);
        let lambda = (mu * mu + two * rate / (vol * vol)).sqrt();

        let h_over_s = opt.barrier / spot;
        let pow_2mu = h_over_s.powf(two * mu);
        let pow_2mu1 = h_over_s.powf(two * (mu + one));

        let phi = match opt.option_type {
            OptionType::Call => one,
            OptionType::Put => -one,
        };
        let eta = if opt.barrier_type.is_up() { -one } else { one };

        let x1 = (spot / opt.strike).ln() / srt + (one + mu) * srt;
        let x2 = (spot / opt.barrier).ln() / srt + (one + mu) * srt;
        let y1 = (opt.barrier * opt.barrier / (spot * opt.strike)).ln() / srt + (one + mu) * srt;
        let y2 = (opt.barrier / spot).ln() / srt + (one + mu) * srt;
        let z = (opt.barrier / spot).ln() / srt + lambda * srt;

        let term_sk = |x: T| phi * spot * norm_cdf(phi * x) - phi * opt.strike * df * norm_cdf(phi * x - phi * srt);
        let term_hs = |y: T| {
            phi * spot * pow_2mu1 * norm_cdf(eta * y)
                - phi * opt.strike * df * pow_2mu * norm_cdf(eta * y - eta * srt)
        };

        let a = term_sk(x1);
        let b = term_sk(x2);
        let c = term_hs(y1);
        let d = term_hs(y2);
        // Rebate at expiry if the option never knocks in.
        let e = opt.rebate
            * df
            * (norm_cdf(eta * x2 - eta * srt) - pow_2mu * norm_cdf(eta * y2 - eta * srt));
        // Rebate at hit if the option knocks out.
        let f = opt.rebate
            * (h_over_s.powf(mu + lambda) * norm_cdf(eta * z)
                + h_over_s.powf(mu - lambda) * norm_cdf(eta * z - two * eta * lambda * srt));

        let strike_above = opt.strike > opt.barrier;
        use BarrierType::*;
        use OptionType::*;
        match (opt.barrier_type, opt.option_type) {
            (DownIn, Call) => {
                if strike_above {
                    c + e
                } else {
                    a - b + d + e
                }
            }
            (UpIn, Call) => {
                if strike_above {
                    a + e
                } else {
                    b - c + d + e
                }
            }
            (DownIn, Put) => {
                if strike_above {
                    b - c + d + e
                } else {
                    a + e
                }
            }
            (UpIn, Put) => {
                if strike_above {
                    a - b + d + e
                } else {
                    c + e
                }
            }
            (DownOut, Call) => {
                if strike_above {
                    a - c + f
                } else {
                    b - d + f
                }
            }
            (UpOut, Call) => {
                if strike_above {
                    f
                } else {
                    a - b + c - d + f
                }
            }
            (DownOut, Put) => {
                if strike_above {
                    a - b + c - d + f
                } else {
                    f
                }
            }
            (UpOut, Put) => {
                if strike_above {
                    b - d + f
                } else {
                    a - c + f
                }
            }
        }
    }
}

impl<T: Float> ValuationOracle<T> for AnalyticBarrierEngine<T> {
    fn value(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        market.validate()?;

        let reference_date = market.valuation_date.next_weekday();
        let t = T::from(self.day_count.year_fraction(reference_date, self.option.expiry))
            .unwrap_or_else(T::nan);
        if t <= T::zero() {
            return Err(PricingError::InvalidInput(format!(
                "option expired: expiry {} is not after reference date {}",
                self.option.expiry, reference_date
            )));
        }
        if market.vol == T::zero() {
            return Err(PricingError::ModelFailure(
                "analytic barrier valuation requires positive volatility".to_string(),
            ));
        }

        let touched = if self.option.barrier_type.is_up() {
            market.spot >= self.option.barrier
        } else {
            market.spot <= self.option.barrier
        };
        if touched {
            return Ok(if self.option.barrier_type.is_in() {
                black_price(
                    self.option.option_type,
                    market.spot,
                    self.option.strike,
                    market.rate,
                    market.vol,
                    t,
                )
            } else {
                // Knock-out has just been hit; the rebate is due now.
                self.option.rebate
            });
        }

        Ok(self.unhit_value(market.spot, market.rate, market.vol, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn market(spot: f64, rate: f64, vol: f64) -> MarketSnapshot<f64> {
        MarketSnapshot::new(spot, rate, vol, Date::from_ymd(2020, 2, 28).unwrap())
    }

    fn expiry() -> Date {
        Date::from_ymd(2024, 2, 29).unwrap()
    }

    #[test]
    fn test_up_out_call_reference_price() {
        // Up-and-Out call, strike 100, barrier 150, rebate 50, quoted market
        // spot 100 / rate 1% / vol 30%, ACT/360.
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry()))
                .unwrap();
        let pv = engine.value(&market(100.0, 0.01, 0.30)).unwrap();
        assert_relative_eq!(pv, 22.056849, epsilon = 1e-3);
    }

    #[test]
    fn test_down_out_put_reference_price() {
        let expiry = Date::from_ymd(2021, 2, 22).unwrap(); // 360 days, t = 1.0
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::down_out_put(100.0, 80.0, 0.0, expiry))
                .unwrap();
        let pv = engine.value(&market(100.0, 0.05, 0.25)).unwrap();
        assert_relative_eq!(pv, 1.126746, epsilon = 1e-3);
    }

    #[test]
    fn test_up_in_call_strike_above_barrier() {
        let expiry = Date::from_ymd(2020, 11, 24).unwrap(); // 270 days, t = 0.75
        let option = BarrierOption::new(
            BarrierType::UpIn,
            OptionType::Call,
            110.0,
            105.0,
            3.0,
            expiry,
        );
        let engine = AnalyticBarrierEngine::new(option).unwrap();
        let pv = engine.value(&market(100.0, 0.02, 0.20)).unwrap();
        assert_relative_eq!(pv, 4.421113, epsilon = 1e-3);
    }

    #[test]
    fn test_in_out_parity_matches_vanilla() {
        // With zero rebate, knock-in + knock-out = vanilla, exactly.
        let m = market(100.0, 0.03, 0.20);
        for (bt_in, bt_out, barrier) in [
            (BarrierType::UpIn, BarrierType::UpOut, 120.0),
            (BarrierType::DownIn, BarrierType::DownOut, 80.0),
        ] {
            let in_pv = AnalyticBarrierEngine::new(BarrierOption::new(
                bt_in,
                OptionType::Call,
                100.0,
                barrier,
                0.0,
                expiry(),
            ))
            .unwrap()
            .value(&m)
            .unwrap();
            let out_pv = AnalyticBarrierEngine::new(BarrierOption::new(
                bt_out,
                OptionType::Call,
                100.0,
                barrier,
                0.0,
                expiry(),
            ))
            .unwrap()
            .value(&m)
            .unwrap();
            let vanilla = black_price(OptionType::Call, 100.0, 100.0, 0.03, 0.20, 1462.0 / 360.0);
            assert_relative_eq!(in_pv + out_pv, vanilla, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_touched_out_barrier_pays_rebate() {
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry()))
                .unwrap();
        let pv = engine.value(&market(150.0, 0.01, 0.30)).unwrap();
        assert_eq!(pv, 50.0);
    }

    #[test]
    fn test_touched_in_barrier_collapses_to_vanilla() {
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::up_in_call(100.0, 150.0, 50.0, expiry()))
                .unwrap();
        let pv = engine.value(&market(155.0, 0.01, 0.30)).unwrap();
        let vanilla = black_price(OptionType::Call, 155.0, 100.0, 0.01, 0.30, 1462.0 / 360.0);
        assert_relative_eq!(pv, vanilla, epsilon = 1e-9);
    }

    #[test]
    fn test_expired_option_is_an_error() {
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry()))
                .unwrap();
        let late = MarketSnapshot::new(100.0, 0.01, 0.30, Date::from_ymd(2024, 3, 1).unwrap());
        assert!(matches!(
            engine.value(&late),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_vol_is_a_model_failure() {
        let engine =
            AnalyticBarrierEngine::new(BarrierOption::up_out_call(100.0, 150.0, 50.0, expiry()))
                .unwrap();
        assert!(matches!(
            engine.value(&market(100.0, 0.01, 0.0)),
            Err(PricingError::ModelFailure(_))
        ));
    }

    #[test]
    fn test_invalid_instrument_rejected_at_construction() {
        assert!(AnalyticBarrierEngine::new(BarrierOption::up_out_call(
            -100.0,
            150.0,
            50.0,
            expiry()
        ))
        .is_err());
        assert!(AnalyticBarrierEngine::new(BarrierOption::up_out_call(
            100.0,
            150.0,
            -1.0,
            expiry()
        ))
        .is_err());
    }

    proptest! {
        /// In-out parity holds across the unhit parameter space.
        #[test]
        fn prop_in_out_parity(
            spot in 85.0_f64..115.0,
            strike in 60.0_f64..140.0,
            rate in 0.0_f64..0.10,
            vol in 0.05_f64..0.60,
        ) {
            let m = market(spot, rate, vol);
            let up_barrier = 160.0;
            let t = 1462.0 / 360.0;
            let in_pv = AnalyticBarrierEngine::new(BarrierOption::new(
                BarrierType::UpIn, OptionType::Call, strike, up_barrier, 0.0, expiry(),
            )).unwrap().value(&m).unwrap();
            let out_pv = AnalyticBarrierEngine::new(BarrierOption::new(
                BarrierType::UpOut, OptionType::Call, strike, up_barrier, 0.0, expiry(),
            )).unwrap().value(&m).unwrap();
            let vanilla = black_price(OptionType::Call, spot, strike, rate, vol, t);
            prop_assert!((in_pv + out_pv - vanilla).abs() < 1e-8 * vanilla.abs().max(1.0));
        }
    }
}
