//! # Monte Carlo European Option Pricer
//!
//! Prices European calls and puts by simulating Geometric Brownian Motion
//! and estimates Delta, Gamma and Theta by bump-and-revalue.
//!
//! ## Layers
//!
//! - [`rng`]: MT19937 uniform generator, Box–Muller normals and the seeded
//!   [`PricerRng`](rng::PricerRng) stream
//! - [`mc`]: GBM path simulation and the [`MonteCarloPricer`]
//! - [`greeks`]: finite-difference [`GreeksEstimator`]
//! - [`analytical`]: Black-Scholes closed forms for verification
//!
//! ## Reproducibility
//!
//! Every result is a pure function of its inputs and the generator seed.
//! The default seed is 5489, so two runs with the same parameters print
//! the same numbers on any platform.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_mc::{GbmParams, GreeksConfig, GreeksEstimator, MonteCarloConfig, MonteCarloPricer, PayoffParams};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(1_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let mut estimator = GreeksEstimator::new(pricer, GreeksConfig::default()).unwrap();
//! let greeks = estimator
//!     .estimate(GbmParams::default(), PayoffParams::put(100.0))
//!     .unwrap();
//! println!("price {:.4} delta {:.4}", greeks.price, greeks.delta);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for parameter and result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use greeks::{GreeksConfig, GreeksEstimator, GreeksResult};
pub use mc::{
    GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams, PayoffType, PricingError,
    PricingResult,
};
pub use rng::{MersenneTwister, PricerRng, DEFAULT_SEED};
