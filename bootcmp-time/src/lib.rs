#![warn(missing_docs)]
//! Monotonic timestamp sampling.
//!
//! Thin wrapper over the platform's monotonic clock plus a lazily computed
//! measurement of its effective precision. Timestamps are only meaningful
//! within a single process run; they are not comparable across restarts or
//! machines.

use std::sync::OnceLock;
use std::time::Instant;

/// A relative timestamp with the highest precision the platform offers.
///
/// Only the difference between two timestamps taken in the same process run
/// carries meaning; see [`diff_nanos`].
pub type Timestamp = Instant;

/// Samples per precision calibration. Enough back-to-back clock reads to
/// observe the smallest positive tick the platform reports.
const CALIBRATION_ROUNDS: usize = 1_000_000;

static PRECISION: OnceLock<i64> = OnceLock::new();

/// Returns a monotonic timestamp.
#[inline(always)]
pub fn sample_time() -> Timestamp {
    Instant::now()
}

/// Returns the difference between two timestamps in nanoseconds.
///
/// Assumes `later` was sampled after `earlier` and returns a negative value
/// when it was not. The resolution of the result is the platform's clock
/// resolution, which may be considerably coarser than one nanosecond
/// (nominally 100ns on Windows, 20–100ns on Linux and macOS).
#[inline(always)]
pub fn diff_nanos(earlier: Timestamp, later: Timestamp) -> i64 {
    if later >= earlier {
        later.duration_since(earlier).as_nanos() as i64
    } else {
        -(earlier.duration_since(later).as_nanos() as i64)
    }
}

/// Returns the precision of [`sample_time`] on this host in nanoseconds:
/// the smallest positive difference observed between back-to-back samples.
///
/// Calibrated once per process and cached for its lifetime. The probe is
/// purely functional and deterministic per host, so a recomputation race
/// would be harmless; `OnceLock` rules it out anyway.
pub fn timer_precision() -> i64 {
    *PRECISION.get_or_init(|| min_observed_delta(CALIBRATION_ROUNDS))
}

/// Minimum positive delta between consecutive clock samples over `rounds`
/// attempts.
fn min_observed_delta(rounds: usize) -> i64 {
    let mut min_diff = i64::MAX;
    for _ in 0..rounds {
        let t1 = sample_time();
        let t2 = sample_time();
        let diff = diff_nanos(t1, t2);
        if diff > 0 && diff < min_diff {
            min_diff = diff;
        }
    }
    min_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_diff_is_monotonic_and_positive() {
        let t1 = sample_time();
        std::thread::sleep(Duration::from_millis(10));
        let t2 = sample_time();
        let diff = diff_nanos(t1, t2);
        // At least 5ms, below 1s even under heavy scheduling noise.
        assert!(diff >= 5_000_000, "diff too small: {diff}");
        assert!(diff < 1_000_000_000, "diff too large: {diff}");
    }

    #[test]
    fn test_diff_reversed_is_negative() {
        let t1 = sample_time();
        std::thread::sleep(Duration::from_millis(2));
        let t2 = sample_time();
        assert!(diff_nanos(t2, t1) < 0);
    }

    #[test]
    fn test_min_observed_delta_reasonable() {
        let precision = min_observed_delta(10_000);
        assert!(precision > 0);
        // Any current platform resolves far better than one millisecond.
        assert!(precision < 1_000_000, "implausible precision: {precision}ns");
    }

    #[test]
    fn test_timer_precision_cached() {
        let first = timer_precision();
        let second = timer_precision();
        assert_eq!(first, second);
        assert!(first > 0);
    }
}
