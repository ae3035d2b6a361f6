//! Greeks calculation configuration.
//!
//! Provides [`GreeksConfig`] for configuring the finite-difference bump
//! sizes.

use crate::mc::PricingError;

/// Days per year used for the default one-day time bump.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Configuration for finite-difference Greeks.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 0.01 (1%) | Relative bump for spot price |
/// | `time_bump_years` | 1/365 | Maturity bump in years (one calendar day) |
///
/// # Examples
///
/// ```rust
/// use pricer_mc::greeks::GreeksConfig;
///
/// let config = GreeksConfig::builder()
///     .spot_bump_relative(0.005)
///     .build()
///     .unwrap();
/// assert_eq!(config.time_bump_years, 1.0 / 365.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreeksConfig {
    /// Relative bump for spot price (default: 0.01 = 1%).
    ///
    /// The actual bump is `spot_bump_relative * spot`.
    pub spot_bump_relative: f64,

    /// Maturity bump in years (default: 1/365).
    pub time_bump_years: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: 0.01,
            time_bump_years: 1.0 / DAYS_PER_YEAR,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder starting from the defaults.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if a bump is non-finite or
    /// non-positive, or if the relative spot bump is 100% or more (the
    /// down-bumped spot would not be positive).
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot_bump_relative.is_finite() && self.spot_bump_relative > 0.0) {
            return Err(PricingError::invalid_parameter(
                "spot_bump_relative",
                format!("must be positive, got {}", self.spot_bump_relative),
            ));
        }
        if self.spot_bump_relative >= 1.0 {
            return Err(PricingError::invalid_parameter(
                "spot_bump_relative",
                format!("must be below 1.0 (100%), got {}", self.spot_bump_relative),
            ));
        }
        if !(self.time_bump_years.is_finite() && self.time_bump_years > 0.0) {
            return Err(PricingError::invalid_parameter(
                "time_bump_years",
                format!("must be positive, got {}", self.time_bump_years),
            ));
        }
        Ok(())
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Clone, Debug, Default)]
pub struct GreeksConfigBuilder {
    config: GreeksConfig,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump.
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.config.spot_bump_relative = bump;
        self
    }

    /// Sets the maturity bump in years.
    pub fn time_bump_years(mut self, bump: f64) -> Self {
        self.config.time_bump_years = bump;
        self
    }

    /// Sets the maturity bump as a number of days.
    pub fn time_bump_days(self, days: f64) -> Self {
        self.time_bump_years(days / DAYS_PER_YEAR)
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// See [`GreeksConfig::validate`].
    pub fn build(self) -> Result<GreeksConfig, PricingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
