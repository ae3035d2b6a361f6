//! Monte Carlo pricing of European options under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (steps, paths, seed)
//! ├── PricerRng         (MT19937 + Box–Muller stream)
//! └── price_european()
//!     ├── GbmParams      -> terminal price per path
//!     ├── PayoffParams   -> max(S_T - K, 0) / max(K - S_T, 0)
//!     └── exp(-rT) × mean
//! ```
//!
//! Nothing below the payoff step knows about strikes or option kinds.
//!
//! # Examples
//!
//! ```rust
//! use pricer_mc::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(5_000)
//!     .n_steps(52)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let gbm = GbmParams {
//!     spot: 100.0,
//!     rate: 0.05,
//!     volatility: 0.2,
//!     maturity: 1.0,
//! };
//!
//! let result = pricer.price_european(gbm, PayoffParams::call(100.0)).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::PricingError;
pub use paths::{simulate_path, simulate_terminal_price, GbmParams};
pub use payoff::{PayoffParams, PayoffType};
pub use pricer::{MonteCarloPricer, PricingResult};
