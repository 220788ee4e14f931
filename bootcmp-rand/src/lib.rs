#![warn(missing_docs)]
//! Random streams for reproducible resampling.
//!
//! Two generators with a shared output shape but divergent guarantees:
//! - [`XorShiftStar`]: tiny, seedable, constant-time, deterministic. Drives
//!   reproducible bootstrap resampling and quickselect pivot choice.
//! - [`EntropyRng`]: buffered reads from the operating system's entropy
//!   source. Not reproducible; used to seed the deterministic generator and
//!   as the sampling fallback when no meaningful seed exists.

mod entropy;
mod xorshift;

pub use entropy::EntropyRng;
pub use xorshift::{XorShiftStar, DEFAULT_SCRAMBLER};

/// A stream of uniformly distributed random values.
///
/// Implemented by both [`XorShiftStar`] (fast, reproducible) and
/// [`EntropyRng`] (unpredictable, OS-backed). Code that only needs "some
/// uniform indices" can take `&mut impl RandomStream` and work with either.
pub trait RandomStream {
    /// Returns the next uniformly distributed 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly distributed value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a value uniformly distributed in `[0, n)`.
    ///
    /// Returns 0 for `n == 0` and `n == 1` instead of faulting.
    fn next_u32_below(&mut self, n: u32) -> u32;
}
