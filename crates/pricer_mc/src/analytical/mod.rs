//! Closed-form reference values.
//!
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal functions, generic over
//!   `T: Float`
//! - Black-Scholes price, delta, gamma and maturity sensitivity for a
//!   [`GbmParams`](crate::mc::GbmParams) and
//!   [`PayoffParams`](crate::mc::PayoffParams) pair

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{
    black_scholes_delta, black_scholes_gamma, black_scholes_maturity_sensitivity,
    black_scholes_price,
};
pub use distributions::{norm_cdf, norm_pdf};
