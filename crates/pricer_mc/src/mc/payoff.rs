//! European option payoffs.
//!
//! Payoffs are evaluated only on the terminal price; this is the single
//! place where strike and call/put semantics enter the simulation.

use super::error::PricingError;

/// Payoff type for option pricing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }
}

impl std::fmt::Display for PayoffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoffType::Call => write!(f, "call"),
            PayoffType::Put => write!(f, "put"),
        }
    }
}

impl std::str::FromStr for PayoffType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(PayoffType::Call),
            "put" | "p" => Ok(PayoffType::Put),
            _ => Err(PricingError::invalid_parameter(
                "payoff_type",
                format!("unknown option kind '{}', expected call or put", s),
            )),
        }
    }
}

/// Parameters for payoff computation.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::PayoffParams;
///
/// let call = PayoffParams::call(100.0);
/// assert_eq!(call.payoff(110.0), 10.0);
/// assert_eq!(call.payoff(90.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffParams {
    /// Strike price.
    pub strike: f64,
    /// Payoff type (Call or Put).
    pub payoff_type: PayoffType,
}

impl PayoffParams {
    /// Creates payoff parameters.
    #[inline]
    pub fn new(strike: f64, payoff_type: PayoffType) -> Self {
        Self {
            strike,
            payoff_type,
        }
    }

    /// Creates call option payoff parameters.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::new(strike, PayoffType::Call)
    }

    /// Creates put option payoff parameters.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::new(strike, PayoffType::Put)
    }

    /// Undiscounted payoff at expiry.
    #[inline]
    pub fn payoff(&self, terminal_price: f64) -> f64 {
        match self.payoff_type {
            PayoffType::Call => (terminal_price - self.strike).max(0.0),
            PayoffType::Put => (self.strike - terminal_price).max(0.0),
        }
    }

    /// Validates the strike.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` for a non-positive or
    /// non-finite strike.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::invalid_parameter(
                "strike",
                format!("must be positive and finite, got {}", self.strike),
            ));
        }
        Ok(())
    }
}
