//! Bootstrap sampling with replacement.

use bootcmp_rand::{EntropyRng, RandomStream, XorShiftStar};

/// Draws a bootstrap sample from `xs`: a new vector of the same length where
/// each element is `xs[i]` for an independently drawn uniform index.
///
/// A non-zero `seed` drives a deterministic [`XorShiftStar`] stream, so the
/// draw is reproducible across calls and machines. Seed 0 is the "no seed"
/// sentinel and falls back to the OS-entropy stream instead.
///
/// Index selection uses the unbiased multiply-high reduction in both paths.
/// The input is never modified; an empty `xs` yields an empty sample.
pub fn bootstrap_sample(xs: &[f64], seed: u64) -> Vec<f64> {
    if xs.is_empty() {
        return Vec::new();
    }
    if seed != 0 {
        draw(xs, &mut XorShiftStar::new(seed))
    } else {
        draw(xs, &mut EntropyRng::new())
    }
}

fn draw(xs: &[f64], rng: &mut impl RandomStream) -> Vec<f64> {
    let n = xs.len() as u32;
    (0..xs.len())
        .map(|_| xs[rng.next_u32_below(n) as usize])
        .collect()
}
