//! Expected-linear-time selection.
//!
//! Randomized quickselect for the k-th order statistic, used to compute
//! medians inside the bootstrap inner loop without fully sorting each
//! resampled population.

use bootcmp_rand::XorShiftStar;
use std::cell::Cell;

thread_local! {
    /// Per-thread pivot stream, entropy-seeded once and advanced across
    /// calls. Selection sits inside the bootstrap inner loop, so it must
    /// not pay an OS entropy read per invocation.
    static PIVOT_RNG: Cell<XorShiftStar> = Cell::new(XorShiftStar::new(0));
}

/// Lomuto partition of `xs[low..=high]` around the value at `high`.
///
/// Elements less than the pivot move left, the pivot lands at its final
/// sorted position, and that position is returned.
fn partition(xs: &mut [f64], low: usize, high: usize) -> usize {
    let pivot = xs[high];
    let mut i = low;
    for j in low..high {
        if xs[j] < pivot {
            xs.swap(i, j);
            i += 1;
        }
    }
    xs.swap(i, high);
    i
}

/// Returns the k-th smallest element (0-indexed) of `xs` in expected O(n)
/// time using randomized quickselect.
///
/// Pivots are drawn uniformly from the current window with a per-thread
/// [`XorShiftStar`] stream seeded once per thread; pivot choice affects only
/// running time, never the result, so sharing the advancing stream keeps
/// selection deterministic in value while keeping the inner loop free of OS
/// entropy reads. `xs` is reordered in place — callers that need the
/// original order must copy first.
///
/// Returns NaN when `xs` is empty or `k` is out of bounds.
pub fn select_kth(xs: &mut [f64], k: usize) -> f64 {
    if k >= xs.len() {
        return f64::NAN;
    }
    PIVOT_RNG.with(|cell| {
        let mut rng = cell.get();
        let mut low = 0usize;
        let mut high = xs.len() - 1;
        // Invariant: low <= k <= high, so the window never under- or
        // overflows.
        let selected = loop {
            let span = (high - low + 1) as u32;
            let pivot_index = low + rng.next_u32_below(span) as usize;
            xs.swap(pivot_index, high);
            let p = partition(xs, low, high);
            if p == k {
                break xs[p];
            } else if p < k {
                low = p + 1;
            } else {
                high = p - 1;
            }
        };
        cell.set(rng);
        selected
    })
}

/// Returns the median of `xs` in expected O(n) time.
///
/// Defined as the element at rank `n / 2`: the exact middle for odd `n`, and
/// the **upper** of the two middle elements for even `n`. This deliberately
/// differs from [`median`](crate::median), which interpolates; the
/// confidence engine's numeric edge cases are tuned against this rank-based
/// convention.
///
/// Reorders `xs` in place. Empty input returns NaN.
pub fn quick_median(xs: &mut [f64]) -> f64 {
    let n = xs.len();
    select_kth(xs, n / 2)
}
