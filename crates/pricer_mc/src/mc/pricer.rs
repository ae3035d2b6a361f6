//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`])
//! 2. Path simulation (one terminal price per path)
//! 3. Payoff evaluation on the terminal price
//! 4. Discounting and aggregation
//!
//! The estimate's statistical error scales as O(1/√m). It is reported as
//! [`PricingResult::std_error`] and is not otherwise reduced.

use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::PricingError;
use super::paths::{GbmParams, GbmStepper};
use super::payoff::PayoffParams;
use crate::rng::{PricerRng, DEFAULT_SEED};

/// Pricing result for a single Monte Carlo estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     n_paths: 10_000,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate (0 for a single path).
    pub std_error: f64,
    /// Number of paths averaged.
    pub n_paths: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine for European options.
///
/// Owns the random stream; successive pricing calls continue the same
/// stream rather than restarting it. Use [`reset`](Self::reset) to replay.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let result = pricer
///     .price_european(GbmParams::default(), PayoffParams::put(100.0))
///     .unwrap();
/// assert!((result.price - 5.572_847_944_183_94).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer seeded from the configuration.
    ///
    /// Without a configured seed the stream starts from [`DEFAULT_SEED`].
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        let seed = config.seed().unwrap_or(DEFAULT_SEED);
        Self::with_rng(config, PricerRng::from_seed(seed))
    }

    /// Creates a new pricer that draws from an injected stream.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the configuration is invalid.
    pub fn with_rng(config: MonteCarloConfig, rng: PricerRng) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns a reference to the random stream.
    #[inline]
    pub fn rng(&self) -> &PricerRng {
        &self.rng
    }

    /// Restarts the stream from the seed it was created with.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.rng.seed());
    }

    /// Restarts the stream from a new seed.
    pub fn reset_with_seed(&mut self, seed: u32) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Prices a European option using Monte Carlo simulation.
    ///
    /// Simulates `n_paths` independent terminal prices, each consuming its
    /// own `n_steps` normals from the pricer's stream, and returns
    /// `exp(-rT) × mean(payoff)`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` for invalid market or
    /// payoff parameters. Validation completes before the first draw.
    pub fn price_european(
        &mut self,
        gbm: GbmParams,
        payoff: PayoffParams,
    ) -> Result<PricingResult, PricingError> {
        gbm.validate()?;
        payoff.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let stepper = GbmStepper::new(gbm, n_steps);

        // The price uses the plain running sum; Welford moments only feed
        // the standard error.
        let mut sum_payoffs = 0.0;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for path in 0..n_paths {
            let terminal = stepper.terminal(&mut self.rng);
            let value = payoff.payoff(terminal);
            sum_payoffs += value;

            let delta = value - mean;
            mean += delta / (path + 1) as f64;
            m2 += delta * (value - mean);
        }

        let discount_factor = gbm.discount_factor();
        let price = discount_factor * (sum_payoffs / n_paths as f64);
        let std_error = if n_paths > 1 {
            let variance = m2 / (n_paths - 1) as f64;
            discount_factor * variance.sqrt() / (n_paths as f64).sqrt()
        } else {
            0.0
        };

        debug!(
            spot = gbm.spot,
            strike = payoff.strike,
            maturity = gbm.maturity,
            kind = %payoff.payoff_type,
            n_paths,
            n_steps,
            price,
            std_error,
            "priced european option"
        );

        Ok(PricingResult {
            price,
            std_error,
            n_paths,
        })
    }
}
