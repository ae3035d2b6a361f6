//! Box–Muller transform from 32-bit uniform draws to standard normals.
//!
//! Each sample spends a fresh pair of draws and returns only the cosine
//! branch. The companion sine variate is discarded, which keeps the draw
//! consumption at exactly two words per normal (more if `u1` hits zero).

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;

/// 2^32 - 1. Dividing a draw by this maps it onto the closed interval [0, 1].
const UNIT_NORMALISER: f64 = 4_294_967_295.0;

/// Standard normal distribution sampled with the Box–Muller transform.
///
/// Works over any [`rand::RngCore`], but the draw order (`u2` first, then
/// `u1`) and normaliser are fixed so that a [`MersenneTwister`] stream
/// yields a reproducible variate sequence.
///
/// [`MersenneTwister`]: super::MersenneTwister
///
/// # Examples
///
/// ```rust
/// use pricer_mc::rng::{BoxMuller, MersenneTwister};
/// use rand_distr::Distribution;
///
/// let mut mt = MersenneTwister::new();
/// let z: f64 = BoxMuller.sample(&mut mt);
/// assert!((z - 0.790_900_942_092_371_6).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxMuller;

/// Maps a raw draw onto [0, 1].
#[inline]
pub fn unit_closed(draw: u32) -> f64 {
    f64::from(draw) / UNIT_NORMALISER
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u2 = unit_closed(rng.next_u32());

        // ln(0) is undefined; a zero draw has probability 2^-32 per attempt.
        let mut u1 = unit_closed(rng.next_u32());
        while u1 == 0.0 {
            u1 = unit_closed(rng.next_u32());
        }
        debug_assert!(u1 > 0.0 && u1 <= 1.0);

        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
