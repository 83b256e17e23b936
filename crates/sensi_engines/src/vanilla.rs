//! Black-Scholes vanilla option valuation.

use num_traits::Float;
use sensi_core::math::norm_cdf;

use crate::barrier::OptionType;

/// Black-Scholes price of a European vanilla option.
///
/// Assumes a flat continuously-compounded rate and no dividend yield
/// (cost of carry equals the rate).
///
/// # Arguments
///
/// * `option_type` - Call or Put
/// * `spot` - Underlying spot price (> 0)
/// * `strike` - Strike price (> 0)
/// * `rate` - Flat continuously-compounded risk-free rate
/// * `vol` - Flat Black volatility (> 0)
/// * `t` - Time to expiry in years (> 0)
///
/// # Examples
///
/// ```
/// use sensi_engines::barrier::OptionType;
/// use sensi_engines::vanilla::black_price;
///
/// let call = black_price(OptionType::Call, 100.0, 100.0, 0.01, 0.30, 4.0611);
/// let put = black_price(OptionType::Put, 100.0, 100.0, 0.01, 0.30, 4.0611);
/// // Put-call parity: C - P = S - K * exp(-r t)
/// let forward = 100.0 - 100.0 * (-0.01_f64 * 4.0611).exp();
/// assert!((call - put - forward).abs() < 1e-9);
/// ```
pub fn black_price<T: Float>(option_type: OptionType, spot: T, strike: T, rate: T, vol: T, t: T) -> T {
    let srt = vol * t.sqrt();
    let half = T::from(0.5).unwrap();
    let d1 = ((spot / strike).ln() + (rate + half * vol * vol) * t) / srt;
    let d2 = d1 - srt;
    let df = (-rate * t).exp();
    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}
