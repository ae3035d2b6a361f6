//! Greeks calculation by finite differences.
//!
//! This module provides:
//! - [`GreeksResult`]: price plus Delta, Gamma and Theta
//! - [`GreeksConfig`]: bump sizes for the finite differences
//! - [`GreeksEstimator`]: bump-and-revalue over [`MonteCarloPricer`](crate::mc::MonteCarloPricer)

mod config;
mod estimator;
mod result;

pub use config::{GreeksConfig, GreeksConfigBuilder, DAYS_PER_YEAR};
pub use estimator::GreeksEstimator;
pub use result::GreeksResult;

#[cfg(test)]
mod tests;
