//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the reference formulas can run in `f32` as
//! well as `f64`.

use num_traits::Float;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients.
const ERFC_P: f64 = 0.327_591_1;
const ERFC_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Converts an `f64` constant into `T`.
///
/// Every `Float` in use represents these constants; a type that cannot
/// yields NaN and the result propagates it.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let t = one / (one + constant::<T>(ERFC_P) * abs_x);
    let poly = ERFC_A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| acc * t + constant(a));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        constant::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function Φ(x).
///
/// Computed as `0.5 · erfc(-x / √2)`, accurate to about 1e-7.
///
/// # Examples
/// ```
/// use pricer_mc::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    constant::<T>(0.5) * erfc_approx(-x / constant(SQRT_2))
}

/// Standard normal probability density φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
/// ```
/// use pricer_mc::analytical::norm_pdf;
///
/// assert!((norm_pdf(1.0_f64) - 0.241_970_724_5).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (constant::<T>(-0.5) * x * x).exp()
}
