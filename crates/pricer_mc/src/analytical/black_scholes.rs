//! Closed-form Black-Scholes values for European options.
//!
//! Used as reference values for the Monte Carlo estimates.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use crate::mc::{GbmParams, PayoffParams, PricingError};

/// Validated inputs shared by every formula.
struct Inputs {
    spot: f64,
    rate: f64,
    vol_sqrt_t: f64,
    maturity: f64,
    discounted_strike: f64,
    d1: f64,
    d2: f64,
    is_call: bool,
}

impl Inputs {
    fn new(gbm: &GbmParams, payoff: &PayoffParams) -> Result<Self, PricingError> {
        gbm.validate()?;
        payoff.validate()?;
        if gbm.volatility <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!(
                    "closed form needs positive volatility, got {}",
                    gbm.volatility
                ),
            ));
        }

        let vol_sqrt_t = gbm.volatility * gbm.maturity.sqrt();
        let d1 = ((gbm.spot / payoff.strike).ln()
            + (gbm.rate + 0.5 * gbm.volatility * gbm.volatility) * gbm.maturity)
            / vol_sqrt_t;

        Ok(Self {
            spot: gbm.spot,
            rate: gbm.rate,
            vol_sqrt_t,
            maturity: gbm.maturity,
            discounted_strike: payoff.strike * gbm.discount_factor(),
            d1,
            d2: d1 - vol_sqrt_t,
            is_call: payoff.payoff_type.is_call(),
        })
    }
}

/// Black-Scholes price of a European option.
///
/// # Errors
///
/// Returns `PricingError::InvalidParameter` for invalid inputs or zero
/// volatility.
///
/// # Examples
/// ```
/// use pricer_mc::analytical::black_scholes_price;
/// use pricer_mc::mc::{GbmParams, PayoffParams};
///
/// let put = black_scholes_price(&GbmParams::default(), &PayoffParams::put(100.0)).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
/// ```
pub fn black_scholes_price(gbm: &GbmParams, payoff: &PayoffParams) -> Result<f64, PricingError> {
    let x = Inputs::new(gbm, payoff)?;
    let price = if x.is_call {
        x.spot * norm_cdf(x.d1) - x.discounted_strike * norm_cdf(x.d2)
    } else {
        x.discounted_strike * norm_cdf(-x.d2) - x.spot * norm_cdf(-x.d1)
    };
    Ok(price)
}

/// Black-Scholes delta ∂V/∂S.
///
/// # Errors
///
/// See [`black_scholes_price`].
pub fn black_scholes_delta(gbm: &GbmParams, payoff: &PayoffParams) -> Result<f64, PricingError> {
    let x = Inputs::new(gbm, payoff)?;
    let call_delta = norm_cdf(x.d1);
    Ok(if x.is_call {
        call_delta
    } else {
        call_delta - 1.0
    })
}

/// Black-Scholes gamma ∂²V/∂S², identical for calls and puts.
///
/// # Errors
///
/// See [`black_scholes_price`].
pub fn black_scholes_gamma(gbm: &GbmParams, payoff: &PayoffParams) -> Result<f64, PricingError> {
    let x = Inputs::new(gbm, payoff)?;
    Ok(norm_pdf(x.d1) / (x.spot * x.vol_sqrt_t))
}

/// Black-Scholes sensitivity to maturity, ∂V/∂T.
///
/// This is the quantity the maturity forward difference
/// `-(V(T - dT) - V(T)) / dT` estimates. The calendar theta of the
/// textbook formulas is its negative.
///
/// # Errors
///
/// See [`black_scholes_price`].
pub fn black_scholes_maturity_sensitivity(
    gbm: &GbmParams,
    payoff: &PayoffParams,
) -> Result<f64, PricingError> {
    let x = Inputs::new(gbm, payoff)?;
    let diffusion = x.spot * norm_pdf(x.d1) * x.vol_sqrt_t / (2.0 * x.maturity);
    let carry = x.rate * x.discounted_strike;
    Ok(if x.is_call {
        diffusion + carry * norm_cdf(x.d2)
    } else {
        diffusion - carry * norm_cdf(-x.d2)
    })
}
