#![warn(missing_docs)]
//! # bootcmp
//!
//! Statistically rigorous comparison of two populations of scalar
//! measurements — typically wall-clock timings of two competing
//! implementations of the same task.
//!
//! Given the two samples and a list of relative-improvement thresholds,
//! bootcmp reports for each threshold the confidence that the first
//! population is smaller than the second by at least that fraction. It is a
//! measurement-and-inference toolkit, not a benchmarking harness: collect
//! your timing samples however you like (the [`sample_time`]/[`diff_nanos`]
//! helpers are one option), then hand the plain `f64` arrays to
//! [`compare_samples`].
//!
//! ## Quick start
//!
//! ```
//! use bootcmp::compare_samples;
//!
//! // Eleven timings each (nanoseconds per operation).
//! let fast = [100.0; 11];
//! let slow = [120.0; 11];
//!
//! // Confidence that `fast` beats `slow` by ≥ 0%, ≥ 10%, ≥ 20%.
//! let results = compare_samples(&fast, &slow, &[0.0, 0.1, 0.2], 1000)?;
//! for r in &results {
//!     println!("gain ≥ {:.0}% → confidence {:.3}", r.threshold * 100.0, r.confidence);
//! }
//! # Ok::<(), bootcmp::CompareError>(())
//! ```
//!
//! ## Reproducible runs
//!
//! [`compare_samples`] samples non-deterministically. For bit-reproducible
//! confidence estimates, call [`bootstrap_confidence`] with a non-zero base
//! seed; every replicate derives its sampling seeds purely from that base
//! and its own index, so results do not depend on thread count or execution
//! order.

pub use bootcmp_rand::{EntropyRng, RandomStream, XorShiftStar, DEFAULT_SCRAMBLER};
pub use bootcmp_stats::{
    bootstrap_confidence, bootstrap_sample, compare_samples, compare_samples_default,
    factor_to_threshold, floats_equal_within_pct, median, quick_median, select_kth, statistics,
    CompareError, ComparisonEntry, Descriptives, DEFAULT_RESAMPLES, MIN_DATA_POINTS,
};
pub use bootcmp_time::{diff_nanos, sample_time, timer_precision, Timestamp};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        bootstrap_confidence, compare_samples, compare_samples_default, factor_to_threshold,
        quick_median, CompareError, ComparisonEntry, RandomStream, XorShiftStar,
    };
}
