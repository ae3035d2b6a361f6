//! Finite-difference Greeks over the Monte Carlo pricer.

use tracing::debug;

use super::config::GreeksConfig;
use super::result::GreeksResult;
use crate::mc::{GbmParams, MonteCarloPricer, PayoffParams, PricingError};

/// Bump-and-revalue estimator for Delta, Gamma and Theta.
///
/// Prices four scenarios in a fixed order: base, spot up, spot down, and
/// maturity shortened by one time bump. Each scenario continues the
/// pricer's stream, so the four prices use independent draws and no noise
/// cancels between them.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::greeks::{GreeksConfig, GreeksEstimator};
/// use pricer_mc::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(2_000)
///     .n_steps(12)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let mut estimator = GreeksEstimator::new(pricer, GreeksConfig::default()).unwrap();
/// let greeks = estimator
///     .estimate(GbmParams::default(), PayoffParams::call(100.0))
///     .unwrap();
/// assert!(greeks.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct GreeksEstimator {
    pricer: MonteCarloPricer,
    config: GreeksConfig,
}

impl GreeksEstimator {
    /// Creates an estimator around `pricer`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the bump configuration is invalid.
    pub fn new(pricer: MonteCarloPricer, config: GreeksConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { pricer, config })
    }

    /// Returns the bump configuration.
    #[inline]
    pub fn config(&self) -> &GreeksConfig {
        &self.config
    }

    /// Returns the underlying pricer.
    #[inline]
    pub fn pricer(&self) -> &MonteCarloPricer {
        &self.pricer
    }

    /// Consumes the estimator, returning the pricer at its current stream
    /// position.
    pub fn into_pricer(self) -> MonteCarloPricer {
        self.pricer
    }

    /// Prices the option and estimates Delta, Gamma and Theta.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` for invalid market or
    /// payoff parameters, when the maturity does not exceed the time bump,
    /// or when a bumped spot leaves the valid range. All checks run before
    /// the first draw.
    pub fn estimate(
        &mut self,
        gbm: GbmParams,
        payoff: PayoffParams,
    ) -> Result<GreeksResult, PricingError> {
        gbm.validate()?;
        payoff.validate()?;

        let d_spot = self.config.spot_bump_relative * gbm.spot;
        let d_time = self.config.time_bump_years;
        let shortened = gbm.maturity - d_time;
        if shortened <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "maturity",
                format!(
                    "maturity {} must exceed the time bump {}",
                    gbm.maturity, d_time
                ),
            ));
        }
        let up = gbm.with_spot(gbm.spot + d_spot);
        let down = gbm.with_spot(gbm.spot - d_spot);
        let next = gbm.with_maturity(shortened);
        for scenario in [&up, &down, &next] {
            scenario.validate()?;
        }

        let base = self.pricer.price_european(gbm, payoff)?;
        let price_up = self.pricer.price_european(up, payoff)?.price;
        let price_down = self.pricer.price_european(down, payoff)?.price;
        let price_next = self.pricer.price_european(next, payoff)?.price;

        let price = base.price;
        let delta = (price_up - price_down) / (2.0 * d_spot);
        let gamma = (price_up - 2.0 * price + price_down) / (d_spot * d_spot);
        let theta = -(price_next - price) / d_time;

        debug!(
            d_spot,
            d_time,
            price,
            price_up,
            price_down,
            price_next,
            delta,
            gamma,
            theta,
            "estimated greeks"
        );

        Ok(GreeksResult {
            price,
            std_error: base.std_error,
            delta,
            gamma,
            theta,
        })
    }
}
