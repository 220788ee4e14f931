#![warn(missing_docs)]
//! Statistical comparison of two measurement populations.
//!
//! Given two samples of scalar measurements (typically wall-clock timings of
//! two competing implementations), this crate estimates the confidence that
//! one population is smaller than the other by at least each of a set of
//! requested relative-improvement thresholds:
//! - Bootstrap resampling with reproducible, per-replicate derived seeds
//! - Expected-linear-time medians via randomized quickselect
//! - Threshold sweep aggregated into ordered (threshold, confidence) records
//! - Descriptive helpers (sort-based median, mean/variance/stddev)

mod comparison;
mod confidence;
mod resample;
mod select;
mod summary;

pub use comparison::{
    compare_samples, compare_samples_default, factor_to_threshold, CompareError, ComparisonEntry,
};
pub use confidence::bootstrap_confidence;
pub use resample::bootstrap_sample;
pub use select::{quick_median, select_kth};
pub use summary::{floats_equal_within_pct, median, statistics, Descriptives};

/// Minimum number of measurements required in each input of
/// [`compare_samples`]. Bootstrap medians are unreliable below this size.
pub const MIN_DATA_POINTS: usize = 11;

/// Default number of bootstrap resamples.
///
/// A balanced trade-off between Monte-Carlo precision and runtime cost;
/// 5k follows common recommendations in the bootstrap literature (Efron &
/// Tibshirani; Davison & Hinkley). Increase it for extreme-tail accuracy or
/// highly precise confidence estimates.
pub const DEFAULT_RESAMPLES: u64 = 5_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_DATA_POINTS, 11);
        assert_eq!(DEFAULT_RESAMPLES, 5_000);
    }
}
