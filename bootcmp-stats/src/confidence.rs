//! Bootstrap confidence estimation.
//!
//! Runs many independent bootstrap replicates, each comparing the medians of
//! two resampled populations, and reports for every requested threshold the
//! fraction of replicates whose relative improvement met it.

use crate::resample::bootstrap_sample;
use crate::select::quick_median;
use rayon::prelude::*;
use tracing::debug;

/// Relative factor for the scale-aware near-zero denominator guard.
const EPS_REL: f64 = 1e-12;

/// Absolute floor for the epsilon guard: the smallest positive `f64`
/// (subnormal, 5e-324), not the smallest positive *normal*.
const EPS_FLOOR: f64 = 5e-324;

/// Estimates the probability that values in `a` are smaller than values in
/// `b` by at least each threshold in `thresholds`.
///
/// Per replicate `i` in `[0, resamples)`:
/// 1. Derive a reproducible seed pair from `base_seed` and `i`
///    (`s = base_seed + i; seed_a = 2s+1; seed_b = 2s+2`). When `base_seed`
///    is 0 every replicate samples non-deterministically instead.
/// 2. Draw a bootstrap sample from each population and take the quickselect
///    median of each.
/// 3. Evaluate the relative difference `delta = 1 − median(a)/median(b)`
///    (with the edge cases described below) and count, for every threshold
///    `t`, whether `delta >= t`.
///
/// After all replicates each threshold's confidence is its hit count divided
/// by `resamples`. The result pairs each threshold with its confidence, in
/// the order the thresholds were given.
///
/// Replicates run in parallel. Because the seed pair is a pure function of
/// `(base_seed, i)` and the hit counters are combined by plain summation,
/// results for a non-zero `base_seed` are bit-identical regardless of worker
/// count or execution order.
///
/// Numeric edge cases (load-bearing, see [`compare_samples`]):
/// - `resamples == 0`: every threshold maps to NaN; no replicates run.
/// - A NaN median (e.g. from an empty sample) makes the replicate's delta
///   NaN, which never satisfies any threshold.
/// - Equal medians — including both zero and both infinite with the same
///   sign — give `delta = 0`.
/// - A vanishing `median(b)` is replaced by a scale-aware epsilon,
///   `max(|median(b)| * 1e-12, 5e-324)` (floored at the smallest positive
///   representable `f64`), keeping delta finite without distorting the
///   ratio for normal-magnitude inputs.
///
/// [`compare_samples`]: crate::compare_samples
pub fn bootstrap_confidence(
    a: &[f64],
    b: &[f64],
    thresholds: &[f64],
    resamples: u64,
    base_seed: u64,
) -> Vec<(f64, f64)> {
    if resamples == 0 {
        return thresholds.iter().map(|&t| (t, f64::NAN)).collect();
    }

    debug!(
        resamples,
        base_seed,
        thresholds = thresholds.len(),
        len_a = a.len(),
        len_b = b.len(),
        "running bootstrap replicates"
    );

    let hits = (0..resamples)
        .into_par_iter()
        .fold(
            || vec![0u64; thresholds.len()],
            |mut hits, i| {
                let delta = replicate_delta(a, b, i, base_seed);
                for (hit, &t) in hits.iter_mut().zip(thresholds) {
                    // A NaN delta satisfies no threshold.
                    if delta >= t {
                        *hit += 1;
                    }
                }
                hits
            },
        )
        .reduce(
            || vec![0u64; thresholds.len()],
            |mut acc, partial| {
                for (total, count) in acc.iter_mut().zip(partial) {
                    *total += count;
                }
                acc
            },
        );

    thresholds
        .iter()
        .zip(hits)
        .map(|(&t, hit)| (t, hit as f64 / resamples as f64))
        .collect()
}

/// Runs one bootstrap replicate and returns its relative-difference
/// statistic.
fn replicate_delta(a: &[f64], b: &[f64], index: u64, base_seed: u64) -> f64 {
    // The seed pair must stay a pure function of (base_seed, index) so the
    // replicate loop can be partitioned across workers freely. Zero base
    // seed keeps the non-deterministic sampling path of bootstrap_sample.
    let (seed_a, seed_b) = if base_seed == 0 {
        (0, 0)
    } else {
        let s = base_seed.wrapping_add(index);
        (
            s.wrapping_mul(2).wrapping_add(1),
            s.wrapping_mul(2).wrapping_add(2),
        )
    };

    let mut sample_a = bootstrap_sample(a, seed_a);
    let mut sample_b = bootstrap_sample(b, seed_b);
    let med_a = quick_median(&mut sample_a);
    let med_b = quick_median(&mut sample_b);
    relative_difference(med_a, med_b)
}

/// `1 − med_a/med_b`, guarded against NaN medians and vanishing
/// denominators.
fn relative_difference(med_a: f64, med_b: f64) -> f64 {
    if med_a.is_nan() || med_b.is_nan() {
        return f64::NAN;
    }
    if med_a == med_b {
        // Also covers both-zero and same-signed-infinite medians.
        return 0.0;
    }
    let eps = (med_b.abs() * EPS_REL).max(EPS_FLOOR);
    let denom = if med_b.abs() < eps { eps } else { med_b };
    1.0 - med_a / denom
}
