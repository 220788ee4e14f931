//! Deterministic xorshift* generator.
//!
//! State transition is three shift-xors (12/25/27), output is the new state
//! multiplied by an odd scrambler constant for full 64-bit avalanche. Period
//! is 2^64 − 1 over the state register.

use crate::RandomStream;
use rand::RngCore;

/// Default scrambler constant, tuned for the 12/25/27 shift triple.
pub const DEFAULT_SCRAMBLER: u64 = 0x2545_F491_4F6C_DD1D;

/// Deterministic pseudo-random generator based on xorshift*.
///
/// Properties:
/// - Deterministic: two instances built with the same seed and scrambler
///   produce byte-identical output streams indefinitely.
/// - Constant-time per draw, small footprint, callable billions of times.
/// - Not cryptographically secure and not thread-safe; give each worker
///   its own instance.
///
/// The type is `Copy`. Copying the struct forks the stream: the copy and the
/// original diverge from that point and never affect each other. Pass
/// `&mut XorShiftStar` to routines that should share one cursor.
#[derive(Debug, Clone, Copy)]
pub struct XorShiftStar {
    state: u64,
    scrambler: u64,
    rounds: u64,
}

impl XorShiftStar {
    /// Creates a generator with the default scrambler.
    ///
    /// The state register must never be zero; a zero `seed` is replaced by a
    /// non-zero value drawn from the OS entropy source, making the stream
    /// non-reproducible.
    pub fn new(seed: u64) -> Self {
        Self::with_scrambler(seed, DEFAULT_SCRAMBLER)
    }

    /// Creates a generator with a caller-supplied scrambler constant.
    ///
    /// The scrambler must be odd to be invertible mod 2^64; the low bit is
    /// forced on. Zero `seed` behaves as in [`XorShiftStar::new`].
    pub fn with_scrambler(seed: u64, scrambler: u64) -> Self {
        let state = if seed != 0 {
            seed
        } else {
            nonzero_entropy_seed()
        };
        Self {
            state,
            scrambler: scrambler | 1,
            rounds: 0,
        }
    }

    /// Current value of the state register. Never zero.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Number of draws made so far. Diagnostic only.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Returns the next pseudo-random 64-bit value.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        self.rounds += 1;
        x.wrapping_mul(self.scrambler)
    }

    /// Returns a uniform value in `[0.0, 1.0)` with 53 bits of precision.
    #[inline(always)]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Returns a value uniformly distributed in `[0, n)` without modulo bias.
    ///
    /// Lemire's multiply-high reduction: one 32-bit draw (the top half of a
    /// 64-bit draw) times `n` as a 64-bit product, keeping the high 32 bits.
    /// No division, no rejection loop. Returns 0 for `n == 0` and `n == 1`.
    #[inline(always)]
    pub fn next_u32_below(&mut self, n: u32) -> u32 {
        let v = (self.next_u64() >> 32) as u32;
        ((u64::from(v) * u64::from(n)) >> 32) as u32
    }
}

impl RandomStream for XorShiftStar {
    fn next_u64(&mut self) -> u64 {
        XorShiftStar::next_u64(self)
    }

    fn next_f64(&mut self) -> f64 {
        XorShiftStar::next_f64(self)
    }

    fn next_u32_below(&mut self, n: u32) -> u32 {
        XorShiftStar::next_u32_below(self, n)
    }
}

/// Draws a non-zero 64-bit seed from the OS entropy source.
///
/// Failure of the entropy source is fatal; there is no safe deterministic
/// fallback (see `EntropyRng`).
fn nonzero_entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    loop {
        rand::rngs::OsRng.fill_bytes(&mut buf);
        let seed = u64::from_le_bytes(buf);
        if seed != 0 {
            return seed;
        }
    }
}
