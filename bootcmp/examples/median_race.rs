//! Times the expected-linear quickselect median against the sort-based
//! median and reports, per relative-speedup threshold, the confidence that
//! quickselect is faster.
//!
//! Run with `cargo run --release --example median_race`.

use bootcmp::{
    compare_samples, diff_nanos, median, quick_median, sample_time, timer_precision, XorShiftStar,
};

/// Size of the array handed to both median implementations.
const N: usize = 50;
/// Number of timing samples per implementation.
const REPEATS: usize = 101;
/// Median calls per timing sample, to lift each sample above clock jitter.
const INNER_LOOPS: usize = 2000;
/// Bootstrap resamples for the comparison.
const RESAMPLES: u64 = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("bootcmp=debug")
        .init();

    println!(
        "timer precision on this host: {}ns",
        timer_precision()
    );

    let mut seed_rng = XorShiftStar::new(0);
    let mut work_sorted = vec![0.0; N];
    let mut work_quick = vec![0.0; N];

    // Warm up both paths.
    let warm = XorShiftStar::new(seed_rng.next_u64());
    fill_array(&mut work_sorted, warm);
    fill_array(&mut work_quick, warm);
    let _ = median(&work_sorted);
    let _ = quick_median(&mut work_quick);

    let mut times_sorted = Vec::with_capacity(REPEATS);
    let mut times_quick = Vec::with_capacity(REPEATS);

    for _ in 0..REPEATS {
        // Fresh generator state per timing sample. fill_array takes the
        // generator by value, so each inner iteration replays the same
        // constant-time fill and the refresh never skews the measurement.
        let fill = XorShiftStar::new(seed_rng.next_u64());

        let t1 = sample_time();
        for _ in 0..INNER_LOOPS {
            fill_array(&mut work_sorted, fill);
            let _ = median(&work_sorted);
        }
        let t2 = sample_time();
        times_sorted.push(diff_nanos(t1, t2) as f64 / INNER_LOOPS as f64);

        let t3 = sample_time();
        for _ in 0..INNER_LOOPS {
            fill_array(&mut work_quick, fill);
            let _ = quick_median(&mut work_quick);
        }
        let t4 = sample_time();
        times_quick.push(diff_nanos(t3, t4) as f64 / INNER_LOOPS as f64);
    }

    let speedups = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    let results = compare_samples(&times_quick, &times_sorted, &speedups, RESAMPLES)
        .expect("enough timing samples collected");

    println!("runtime comparison: quick_median vs. sort-based median, arrays of {N} elements");
    for r in &results {
        println!(
            "speedup ≥ {:>5.1}% → confidence {:6.1}%",
            r.threshold * 100.0,
            r.confidence * 100.0
        );
    }
}

/// Fills `array` with uniform values from a forked copy of `rng`.
///
/// Takes the generator by value on purpose: the caller's stream is never
/// advanced, so repeated calls with the same copy produce identical data in
/// constant time.
fn fill_array(array: &mut [f64], mut rng: XorShiftStar) {
    for slot in array {
        *slot = rng.next_f64();
    }
}
