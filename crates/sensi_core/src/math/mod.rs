//! Shared numerical routines.

use num_traits::Float;

/// Standard normal cumulative distribution function.
///
/// Uses the Abramowitz and Stegun 7.1.26 rational approximation of the
/// complementary error function (absolute error below 1.5e-7), clamped in
/// the far tails.
///
/// # Examples
///
/// ```
/// use sensi_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.959964_f64) - 0.975).abs() < 1e-6);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    // Handle extreme values
    let abs_x = x.abs();
    if abs_x > T::from(8.0).unwrap() {
        return if x > zero { one } else { zero };
    }

    // Abramowitz and Stegun constants
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // N(x) = erfc(-x / sqrt(2)) / 2
    let arg = -x / sqrt_2;
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();
    let erfc = if arg >= zero { erfc_abs } else { two - erfc_abs };
    half * erfc
}
