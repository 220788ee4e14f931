//! Sample comparison façade.
//!
//! Validates inputs, fills in defaults, and packages the confidence engine's
//! output into ordered result records.

use crate::confidence::bootstrap_confidence;
use crate::{DEFAULT_RESAMPLES, MIN_DATA_POINTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// One evaluated threshold from [`compare_samples`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// The relative-improvement threshold that was evaluated.
    pub threshold: f64,
    /// Estimated probability in `[0, 1]` that values from A are smaller than
    /// values from B by at least `threshold`.
    pub confidence: f64,
}

/// Errors from sample comparison.
#[derive(Debug, Clone, Error)]
pub enum CompareError {
    /// One of the inputs is too small for bootstrap medians to be reliable.
    #[error(
        "not enough data points: got {len_a} and {len_b}, need at least {min} measurements in each input"
    )]
    InsufficientData {
        /// Number of measurements supplied for A.
        len_a: usize,
        /// Number of measurements supplied for B.
        len_b: usize,
        /// Minimum required in each input ([`MIN_DATA_POINTS`]).
        min: usize,
    },
}

/// Compares two samples of scalar measurements and estimates, for each
/// requested relative gain, the confidence that values from `a` are smaller
/// than values from `b` by at least that fraction.
///
/// The function is metric-agnostic: it treats each slice as a sample of
/// independent measurements where *smaller* is better, which matches
/// runtimes or memory footprints. For a larger-is-better metric (e.g.
/// throughput), transform the inputs first — take reciprocals or negate —
/// so that smaller means better.
///
/// Each bootstrap replicate resamples both populations, takes their medians
/// and evaluates `delta = 1 − median(a)/median(b)`. A positive delta means
/// `a` is smaller by that fraction (delta 0.2 → A is 20% smaller); the
/// confidence for a threshold is the fraction of replicates with
/// `delta >= threshold`.
///
/// `relative_gains` may contain negative values: `t = -0.05` asks whether A
/// is *no more than 5% worse* than B, since a replicate with `delta = -0.03`
/// still satisfies `delta >= -0.05`. Zero remains the plain "is A smaller at
/// all". An empty list evaluates the single threshold 0.0.
///
/// Thresholds are sorted ascending and the returned entries are in that
/// order. Sampling is non-deterministic here; use [`bootstrap_confidence`]
/// directly with a non-zero seed for reproducible runs.
///
/// # Errors
///
/// [`CompareError::InsufficientData`] when either input holds fewer than
/// [`MIN_DATA_POINTS`] measurements.
pub fn compare_samples(
    a: &[f64],
    b: &[f64],
    relative_gains: &[f64],
    resamples: u64,
) -> Result<Vec<ComparisonEntry>, CompareError> {
    if a.len() < MIN_DATA_POINTS || b.len() < MIN_DATA_POINTS {
        return Err(CompareError::InsufficientData {
            len_a: a.len(),
            len_b: b.len(),
            min: MIN_DATA_POINTS,
        });
    }

    let mut gains: Vec<f64> = if relative_gains.is_empty() {
        vec![0.0]
    } else {
        relative_gains.to_vec()
    };
    gains.sort_by(f64::total_cmp);

    debug!(gains = gains.len(), resamples, "comparing samples");

    Ok(bootstrap_confidence(a, b, &gains, resamples, 0)
        .into_iter()
        .map(|(threshold, confidence)| ComparisonEntry {
            threshold,
            confidence,
        })
        .collect())
}

/// [`compare_samples`] with the recommended default of
/// [`DEFAULT_RESAMPLES`] bootstrap resamples.
pub fn compare_samples_default(
    a: &[f64],
    b: &[f64],
    relative_gains: &[f64],
) -> Result<Vec<ComparisonEntry>, CompareError> {
    compare_samples(a, b, relative_gains, DEFAULT_RESAMPLES)
}

/// Converts a multiplicative "times faster" factor into the equivalent
/// relative-gain threshold via `1 − 1/factor`.
///
/// `2.0` (twice as fast) becomes `0.5`, `1.0` becomes `0.0`, and positive
/// infinity becomes exactly `1.0`. Non-positive or NaN factors have no
/// meaningful threshold and return NaN; callers must check explicitly.
pub fn factor_to_threshold(times_faster: f64) -> f64 {
    if times_faster.is_nan() || times_faster <= 0.0 {
        return f64::NAN;
    }
    1.0 - 1.0 / times_faster
}
