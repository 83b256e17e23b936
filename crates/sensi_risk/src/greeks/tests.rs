//! Tests for bump configuration and the finite-difference estimator.

use super::*;
use crate::error::GreeksError;
use approx::assert_relative_eq;
use proptest::prelude::*;
use sensi_core::types::{Date, PricingError};
use std::cell::Cell;

fn snapshot() -> MarketSnapshot<f64> {
    MarketSnapshot::new(100.0, 0.01, 0.30, Date::from_ymd(2020, 2, 28).unwrap())
}

/// Oracle returning a fixed price regardless of input.
struct ConstantOracle(f64);

impl ValuationOracle<f64> for ConstantOracle {
    fn value(&self, _market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
        Ok(self.0)
    }
}

/// Oracle whose price is an exact linear function of spot: a + b * S.
struct LinearOracle {
    a: f64,
    b: f64,
}

impl ValuationOracle<f64> for LinearOracle {
    fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
        Ok(self.a + self.b * market.spot)
    }
}

/// Oracle that counts how many times it is evaluated.
struct CountingOracle {
    calls: Cell<usize>,
}

impl CountingOracle {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl ValuationOracle<f64> for CountingOracle {
    fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
        self.calls.set(self.calls.get() + 1);
        Ok(market.spot)
    }
}

/// Oracle that always fails.
struct FailingOracle;

impl ValuationOracle<f64> for FailingOracle {
    fn value(&self, _market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
        Err(PricingError::ModelFailure("unpriceable".to_string()))
    }
}

mod bump_config_tests {
    use super::*;

    #[test]
    fn test_default_bumps() {
        let bumps = BumpConfig::<f64>::default();
        assert_eq!(bumps.spot_bump, 0.01);
        assert_eq!(bumps.rate_bump, 1e-4);
        assert_eq!(bumps.vol_bump, 1e-4);
        assert_eq!(bumps.theta_days, 1);
        assert!(bumps.validate().is_ok());
    }

    #[test]
    fn test_zero_bump_rejected() {
        for field in ["spot", "rate", "vol"] {
            let mut bumps = BumpConfig::<f64>::default();
            match field {
                "spot" => bumps.spot_bump = 0.0,
                "rate" => bumps.rate_bump = 0.0,
                _ => bumps.vol_bump = 0.0,
            }
            match bumps.validate() {
                Err(GreeksError::InvalidBump { quantity, value }) => {
                    assert_eq!(quantity, field);
                    assert_eq!(value, 0.0);
                }
                other => panic!("expected InvalidBump, got {:?}", other.err()),
            }
        }
    }

    #[test]
    fn test_negative_and_non_finite_bumps_rejected() {
        let mut bumps = BumpConfig::<f64>::default();
        bumps.vol_bump = -1e-4;
        assert!(matches!(
            bumps.validate(),
            Err(GreeksError::InvalidBump { quantity: "vol", .. })
        ));

        let mut bumps = BumpConfig::<f64>::default();
        bumps.spot_bump = f64::NAN;
        assert!(matches!(
            bumps.validate(),
            Err(GreeksError::InvalidBump { quantity: "spot", .. })
        ));

        let mut bumps = BumpConfig::<f64>::default();
        bumps.rate_bump = f64::INFINITY;
        assert!(matches!(
            bumps.validate(),
            Err(GreeksError::InvalidBump { quantity: "rate", .. })
        ));
    }

    #[test]
    fn test_zero_theta_step_rejected() {
        let mut bumps = BumpConfig::<f64>::default();
        bumps.theta_days = 0;
        assert!(matches!(
            bumps.validate(),
            Err(GreeksError::InvalidThetaStep(0))
        ));
    }
}

mod estimator_tests {
    use super::*;

    #[test]
    fn test_constant_oracle_has_zero_sensitivities() {
        let report = FiniteDifferenceGreeks::default()
            .estimate(&ConstantOracle(42.0), &snapshot())
            .unwrap();
        assert_eq!(report.price, 42.0);
        assert_eq!(report.delta, 0.0);
        assert_eq!(report.gamma, 0.0);
        assert_eq!(report.vega, 0.0);
        assert_eq!(report.theta, 0.0);
        assert_eq!(report.rho, 0.0);
    }

    #[test]
    fn test_linear_oracle_recovers_slope() {
        let oracle = LinearOracle { a: 3.0, b: 0.7 };
        let report = FiniteDifferenceGreeks::default()
            .estimate(&oracle, &snapshot())
            .unwrap();
        assert_relative_eq!(report.delta, 0.7, epsilon = 1e-9);
        // Cancellation noise only: |gamma| bounded by ulp(P) / h^2.
        assert_relative_eq!(report.gamma, 0.0, epsilon = 1e-8);
        assert_eq!(report.vega, 0.0);
        assert_eq!(report.rho, 0.0);
    }

    #[test]
    fn test_quadratic_oracle_recovers_curvature() {
        struct Quadratic;
        impl ValuationOracle<f64> for Quadratic {
            fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
                Ok(0.5 * market.spot * market.spot)
            }
        }
        let report = FiniteDifferenceGreeks::default()
            .estimate(&Quadratic, &snapshot())
            .unwrap();
        // Central stencils are exact for quadratics.
        assert_relative_eq!(report.delta, 100.0, epsilon = 1e-6);
        assert_relative_eq!(report.gamma, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_invalid_bump_fails_before_any_evaluation() {
        let oracle = CountingOracle::new();
        let mut bumps = BumpConfig::<f64>::default();
        bumps.spot_bump = 0.0;
        let result = FiniteDifferenceGreeks::new(bumps).estimate(&oracle, &snapshot());
        assert!(matches!(result, Err(GreeksError::InvalidBump { .. })));
        assert_eq!(oracle.calls.get(), 0);
    }

    #[test]
    fn test_evaluation_count() {
        // Baseline, spot up, spot down, rate up, vol up, date forward.
        let oracle = CountingOracle::new();
        FiniteDifferenceGreeks::default()
            .estimate(&oracle, &snapshot())
            .unwrap();
        assert_eq!(oracle.calls.get(), 6);
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let result = FiniteDifferenceGreeks::default().estimate(&FailingOracle, &snapshot());
        assert!(matches!(result, Err(GreeksError::Evaluation(_))));
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let oracle = LinearOracle { a: -2.0, b: 1.3 };
        let estimator = FiniteDifferenceGreeks::default();
        let first = estimator.estimate(&oracle, &snapshot()).unwrap();
        let second = estimator.estimate(&oracle, &snapshot()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_unchanged_on_success_and_failure() {
        let market = snapshot();
        let _ = FiniteDifferenceGreeks::default().estimate(&ConstantOracle(1.0), &market);
        assert_eq!(market, snapshot());

        let _ = FiniteDifferenceGreeks::default().estimate(&FailingOracle, &market);
        assert_eq!(market, snapshot());
    }

    #[test]
    fn test_non_finite_price_propagates_as_nan() {
        struct NanOracle;
        impl ValuationOracle<f64> for NanOracle {
            fn value(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
                // Non-finite only under the bumped vol scenario.
                if market.vol > 0.30 {
                    Ok(f64::NAN)
                } else {
                    Ok(market.spot)
                }
            }
        }
        let report = FiniteDifferenceGreeks::default()
            .estimate(&NanOracle, &snapshot())
            .unwrap();
        assert!(report.vega.is_nan());
        assert!(report.delta.is_finite());
        assert!(report.price.is_finite());
    }

    #[test]
    fn test_report_display_format() {
        let report = GreeksReport {
            price: 22.0568,
            delta: 0.5175,
            gamma: 0.003169,
            vega: 41.7486,
            theta: -5.2468,
            rho: 73.3116,
        };
        assert_eq!(
            report.to_string(),
            "OptionPrice: 22.06, Delta: 0.52, Gamma: 0.0032, Theta: -5.25, Vega: 41.75, Rho: 73.31"
        );
    }
}

proptest! {
    /// Delta of a linear payoff equals its slope for any slope and spot.
    #[test]
    fn prop_linear_delta_matches_slope(
        a in -50.0_f64..50.0,
        b in -5.0_f64..5.0,
        spot in 10.0_f64..1000.0,
    ) {
        let market = snapshot().with_spot(spot);
        let report = FiniteDifferenceGreeks::default()
            .estimate(&LinearOracle { a, b }, &market)
            .unwrap();
        prop_assert!((report.delta - b).abs() < 1e-6);
    }

    /// The input snapshot is never mutated, whatever the market state.
    #[test]
    fn prop_snapshot_immutable(
        spot in 1.0_f64..500.0,
        rate in -0.05_f64..0.15,
        vol in 0.01_f64..1.0,
    ) {
        let market = snapshot().with_spot(spot).with_rate(rate).with_vol(vol);
        let before = market;
        let _ = FiniteDifferenceGreeks::default().estimate(&ConstantOracle(7.0), &market);
        prop_assert_eq!(market, before);
    }
}
