//! Buffered OS-entropy stream.

use crate::RandomStream;
use rand::rngs::OsRng;
use rand::RngCore;

/// Default buffer capacity in bytes.
const DEFAULT_CAPACITY: usize = 8192;

/// Cryptographically seeded random stream with an internal byte buffer.
///
/// Reads entropy from the operating system in batches to amortize the cost
/// of the OS call. Larger buffers mean fewer OS calls; smaller buffers mean
/// less memory. Draw latency is not constant (the buffer refills
/// periodically) and the output sequence is not reproducible.
///
/// Each thread should use its own instance.
///
/// # Panics
///
/// Construction and refills panic if the OS entropy source fails. This is
/// deliberate: there is no safe deterministic fallback, and continuing would
/// silently produce low-quality randomness.
pub struct EntropyRng {
    buf: Vec<u8>,
    pos: usize,
}

impl EntropyRng {
    /// Creates a stream with the default 8 KiB buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a stream with a buffer of `capacity` bytes.
    ///
    /// Capacities below 8 bytes are raised to 8 so the buffer always holds
    /// at least one 64-bit value.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = vec![0u8; capacity.max(8)];
        OsRng.fill_bytes(&mut buf);
        Self { buf, pos: 0 }
    }

    /// Refills the buffer if fewer than `n` bytes remain.
    fn ensure(&mut self, n: usize) {
        if self.pos + n > self.buf.len() {
            OsRng.fill_bytes(&mut self.buf);
            self.pos = 0;
        }
    }

    /// Returns a uniformly distributed 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.ensure(8);
        let bytes: [u8; 8] = self.buf[self.pos..self.pos + 8].try_into().unwrap();
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }

    /// Returns a uniformly distributed 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.ensure(4);
        let bytes: [u8; 4] = self.buf[self.pos..self.pos + 4].try_into().unwrap();
        self.pos += 4;
        u32::from_le_bytes(bytes)
    }

    /// Returns a uniform value in `[0.0, 1.0)`.
    ///
    /// Uses 52 random mantissa bits, the maximum an `f64` can hold without
    /// breaking uniformity. Never returns -0.0, 1.0, NaN, or an infinity.
    pub fn next_f64(&mut self) -> f64 {
        let mantissa = self.next_u64() & 0x000F_FFFF_FFFF_FFFF;
        // Exponent 1023 places the value in [1.0, 2.0).
        f64::from_bits((1023u64 << 52) | mantissa) - 1.0
    }

    /// Returns a value uniformly distributed in `[0, n)`.
    ///
    /// Lemire's multiply-high reduction with the debiasing rejection step,
    /// so the distribution is exactly uniform for every `n`. Returns 0 for
    /// `n == 0` and `n == 1`.
    pub fn next_u32_below(&mut self, n: u32) -> u32 {
        let mut v = self.next_u32();
        let mut prod = u64::from(v) * u64::from(n);
        let mut low = prod as u32;
        if low < n {
            let threshold = n.wrapping_neg() % n;
            while low < threshold {
                v = self.next_u32();
                prod = u64::from(v) * u64::from(n);
                low = prod as u32;
            }
        }
        (prod >> 32) as u32
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStream for EntropyRng {
    fn next_u64(&mut self) -> u64 {
        EntropyRng::next_u64(self)
    }

    fn next_f64(&mut self) -> f64 {
        EntropyRng::next_f64(self)
    }

    fn next_u32_below(&mut self, n: u32) -> u32 {
        EntropyRng::next_u32_below(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_capacity_enforced() {
        let mut rng = EntropyRng::with_capacity(1);
        // Holds at least one u64 without faulting.
        let _ = rng.next_u64();
    }

    #[test]
    fn test_refill_across_boundary() {
        let mut rng = EntropyRng::with_capacity(12);
        // Second draw does not fit in the remaining 4 bytes and must refill.
        let _ = rng.next_u64();
        let _ = rng.next_u64();
        let _ = rng.next_u32();
    }

    #[test]
    fn test_f64_range() {
        let mut rng = EntropyRng::new();
        for _ in 0..100_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x), "out of range: {x}");
            assert!(x.is_finite());
        }
    }

    #[test]
    fn test_u32_below_bounds() {
        let mut rng = EntropyRng::new();
        assert_eq!(rng.next_u32_below(0), 0);
        assert_eq!(rng.next_u32_below(1), 0);
        for _ in 0..100_000 {
            assert!(rng.next_u32_below(13) < 13);
        }
    }

    #[test]
    fn test_u32_below_frequencies() {
        let mut rng = EntropyRng::new();
        let n = 7u32;
        let draws = 1_000_000u64;
        let mut buckets = vec![0u64; n as usize];
        for _ in 0..draws {
            buckets[rng.next_u32_below(n) as usize] += 1;
        }
        let expected = draws as f64 / f64::from(n);
        for (i, &count) in buckets.iter().enumerate() {
            let rel = (count as f64 - expected).abs() / expected;
            assert!(rel < 0.03, "bucket {i}: relative error {rel}");
        }
    }
}
