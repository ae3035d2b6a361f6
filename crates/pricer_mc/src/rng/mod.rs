//! # Random Number Generation Infrastructure
//!
//! This module provides the random number stream behind every simulation in
//! the crate.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the generator is MT19937, so a seed fixes the whole
//!   variate sequence on every platform; unseeded use falls back to
//!   [`DEFAULT_SEED`] at construction time rather than on first draw
//! - **Explicit ownership**: there is no process-wide generator. Each
//!   [`PricerRng`] owns its state and is injected into the pricer
//! - **Ecosystem seams**: [`MersenneTwister`] implements `rand::RngCore` and
//!   [`BoxMuller`] implements `rand_distr::Distribution<f64>`
//!
//! ## Module Structure
//!
//! - [`mt19937`]: the uniform 32-bit generator
//! - [`box_muller`]: uniform-to-normal transform
//! - [`prng`]: the seeded facade used by the simulation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_mc::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```
//!
//! ## Threading
//!
//! A stream must not be shared between threads. Parallel callers build one
//! generator per worker from distinct seeds.

pub mod box_muller;
pub mod mt19937;
pub mod prng;

// Public re-exports
pub use box_muller::{unit_closed, BoxMuller};
pub use mt19937::{MersenneTwister, DEFAULT_SEED, STATE_SIZE};
pub use prng::PricerRng;
