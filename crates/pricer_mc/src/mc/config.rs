//! Monte Carlo simulation configuration.
//!
//! This module provides [`MonteCarloConfig`] and its builder.

use super::error::PricingError;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the discretisation and sampling
/// budget. Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths (m).
    n_paths: usize,
    /// Number of time steps per path (n).
    n_steps: usize,
    /// Optional seed; `None` means the default MT19937 seed.
    seed: Option<u32>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if `n_paths` or `n_steps` is 0.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 {
            return Err(PricingError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 {
            return Err(PricingError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u32>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths (at least 1).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path (at least 1).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the MT19937 seed.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if either count is missing or zero.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid_parameter("n_paths", "must be specified"))?;

        let n_steps = self
            .n_steps
            .ok_or_else(|| PricingError::invalid_parameter("n_steps", "must be specified"))?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
