//! Path simulation for Geometric Brownian Motion.
//!
//! Each step applies the exact log-normal solution of GBM over `dt`:
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//! so the step count changes only how many draws a path consumes, not the
//! terminal distribution.

use super::error::PricingError;
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion under the risk-neutral measure.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Returns a copy with the spot replaced.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with the maturity replaced.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }

    /// Risk-free discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` for any non-finite field,
    /// a non-positive spot or maturity, or a negative volatility.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(PricingError::invalid_parameter(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        Ok(())
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Per-step constants of one discretisation, computed once per simulation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GbmStepper {
    spot: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
    n_steps: usize,
}

impl GbmStepper {
    /// Callers validate `params` and `n_steps` first.
    #[inline]
    pub(crate) fn new(params: GbmParams, n_steps: usize) -> Self {
        let dt = params.maturity / n_steps as f64;
        Self {
            spot: params.spot,
            drift_dt: (params.rate - 0.5 * params.volatility * params.volatility) * dt,
            vol_sqrt_dt: params.volatility * dt.sqrt(),
            n_steps,
        }
    }

    #[inline]
    fn step(&self, current: f64, z: f64) -> f64 {
        current * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }

    /// Evolves one path, drawing one normal per step.
    #[inline]
    pub(crate) fn terminal(&self, rng: &mut PricerRng) -> f64 {
        let mut current = self.spot;
        for _ in 0..self.n_steps {
            current = self.step(current, rng.gen_normal());
        }
        current
    }
}

fn validate_steps(params: &GbmParams, n_steps: usize) -> Result<(), PricingError> {
    params.validate()?;
    if n_steps == 0 {
        return Err(PricingError::InvalidStepCount(n_steps));
    }
    Ok(())
}

/// Simulates one terminal price of a GBM path.
///
/// Draws exactly `n_steps` normal variates from `rng`.
///
/// # Errors
///
/// Returns `PricingError` if the parameters are invalid or `n_steps` is 0.
/// No draw is consumed on error.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{simulate_terminal_price, GbmParams};
/// use pricer_mc::rng::PricerRng;
///
/// let mut rng = PricerRng::default();
/// let terminal = simulate_terminal_price(&mut rng, GbmParams::default(), 252).unwrap();
/// assert!(terminal > 0.0);
/// ```
pub fn simulate_terminal_price(
    rng: &mut PricerRng,
    params: GbmParams,
    n_steps: usize,
) -> Result<f64, PricingError> {
    validate_steps(&params, n_steps)?;
    Ok(GbmStepper::new(params, n_steps).terminal(rng))
}

/// Simulates one GBM path and records every point.
///
/// `path[0]` is the spot and `path[n_steps]` the terminal price. Draws are
/// consumed exactly as in [`simulate_terminal_price`], so both functions
/// agree on the terminal value for the same stream position.
///
/// # Errors
///
/// Returns `PricingError` if the parameters are invalid, `n_steps` is 0, or
/// `path` does not hold exactly `n_steps + 1` points.
pub fn simulate_path(
    rng: &mut PricerRng,
    params: GbmParams,
    n_steps: usize,
    path: &mut [f64],
) -> Result<(), PricingError> {
    validate_steps(&params, n_steps)?;
    if path.len() != n_steps + 1 {
        return Err(PricingError::invalid_parameter(
            "path",
            format!("buffer holds {} points, expected {}", path.len(), n_steps + 1),
        ));
    }

    let stepper = GbmStepper::new(params, n_steps);
    path[0] = params.spot;
    for step in 0..n_steps {
        path[step + 1] = stepper.step(path[step], rng.gen_normal());
    }
    Ok(())
}
