//! MT19937 Mersenne Twister uniform generator.
//!
//! This module provides [`MersenneTwister`], the 32-bit generator of
//! Matsumoto & Nishimura (1998). Every arithmetic step wraps modulo 2^32,
//! so a given seed yields the same sequence on every platform.

use std::fmt;

use rand::RngCore;
use rand_core::impls;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u32 = 5489;

/// Number of 32-bit words in the generator state.
pub const STATE_SIZE: usize = 624;

/// Offset of the word mixed into each twisted word.
const SHIFT_SIZE: usize = 397;

/// Multiplier of the initialisation recurrence.
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Twist matrix constant applied for odd combined words.
const MATRIX_A: u32 = 0x9908_b0df;

const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
const TEMPERING_MASK_C: u32 = 0xefc6_0000;

/// 2^-32, maps a 32-bit draw onto [0, 1).
const INV_TWO_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// MT19937 pseudo-random generator with an explicitly owned state.
///
/// The state is initialised at construction; there is no hidden global
/// instance. Clone the generator to fork an identical stream, or build one
/// instance per worker from distinct seeds.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::rng::MersenneTwister;
///
/// let mut mt = MersenneTwister::new();
/// assert_eq!(mt.next_u32(), 3_499_211_612);
/// assert_eq!(mt.next_u32(), 581_869_302);
/// ```
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; STATE_SIZE],
    /// Index of the next word to temper. `STATE_SIZE` means a twist is due.
    cursor: usize,
    seed: u32,
}

impl MersenneTwister {
    /// Creates a generator seeded with [`DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    /// Creates a generator initialised from `seed`.
    ///
    /// Any 32-bit value is accepted, including zero.
    pub fn from_seed(seed: u32) -> Self {
        let mut generator = Self {
            state: [0; STATE_SIZE],
            cursor: STATE_SIZE,
            seed,
        };
        generator.reseed(seed);
        generator
    }

    /// Reinitialises the whole state from `seed`.
    ///
    /// The next draw regenerates the state before producing output.
    pub fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.cursor = STATE_SIZE;
        self.seed = seed;
    }

    /// Returns the seed the current state was initialised from.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the next tempered 32-bit word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= STATE_SIZE {
            self.twist();
        }

        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_MASK_B;
        y ^= (y << 15) & TEMPERING_MASK_C;
        y ^= y >> 18;
        y
    }

    /// Returns the next draw scaled onto the half-open interval [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * INV_TWO_POW_32
    }

    /// Regenerates all 624 words in place and rewinds the cursor.
    fn twist(&mut self) {
        for i in 0..STATE_SIZE {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % STATE_SIZE] & LOWER_MASK);
            let mut word = self.state[(i + SHIFT_SIZE) % STATE_SIZE] ^ (y >> 1);
            if y & 1 == 1 {
                word ^= MATRIX_A;
            }
            self.state[i] = word;
        }
        self.cursor = 0;
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("seed", &self.seed)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwister {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        MersenneTwister::next_u32(self)
    }

    /// Low word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
