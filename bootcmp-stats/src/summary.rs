//! Descriptive statistics helpers.

/// Descriptive statistics of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptives {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population (biased) variance.
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
}

/// Sort-based median.
///
/// For even-length input this returns the average of the two middle
/// elements, the textbook convention. Note that
/// [`quick_median`](crate::quick_median) instead returns the upper-middle
/// element; the bootstrap engine relies on that rank-based convention, so
/// the two are intentionally not unified.
///
/// Works on a copy; the input is not reordered. Empty input returns 0.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Mean, population variance, and standard deviation of `data`.
///
/// Empty input yields mean 0 with variance and standard deviation −1 as the
/// undefined-value sentinel.
pub fn statistics(data: &[f64]) -> Descriptives {
    if data.is_empty() {
        return Descriptives {
            mean: 0.0,
            variance: -1.0,
            std_dev: -1.0,
        };
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    Descriptives {
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

/// Whether two values agree within a symmetric percentage tolerance.
///
/// True if either value lies within `tolerance_pct` percent of the other, so
/// the check does not depend on argument order.
pub fn floats_equal_within_pct(f1: f64, f2: f64, tolerance_pct: f64) -> bool {
    let tol1 = (f1 * tolerance_pct / 100.0).abs();
    if f1 - tol1 <= f2 && f1 + tol1 >= f2 {
        return true;
    }
    let tol2 = (f2 * tolerance_pct / 100.0).abs();
    f2 - tol2 <= f1 && f2 + tol2 >= f1
}
