//! Integration tests for bootcmp.
//!
//! These exercise the full pipeline: façade validation, the bootstrap
//! confidence engine, quickselect medians, and the deterministic generator
//! underneath them.

use bootcmp::{
    bootstrap_confidence, compare_samples, compare_samples_default, factor_to_threshold,
    quick_median, CompareError, XorShiftStar, DEFAULT_RESAMPLES, MIN_DATA_POINTS,
};

/// Noisy-but-separated timing populations for end-to-end runs.
fn jittered(center: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = XorShiftStar::new(seed);
    (0..n).map(|_| center + rng.next_f64() * 4.0 - 2.0).collect()
}

#[test]
fn test_end_to_end_scenario() {
    let a = vec![100.0; 11];
    let b = vec![120.0; 11];
    let results = compare_samples(&a, &b, &[0.3, 0.1, 0.2], 1000).unwrap();

    assert_eq!(results.len(), 3);
    let thresholds: Vec<f64> = results.iter().map(|r| r.threshold).collect();
    assert_eq!(thresholds, vec![0.1, 0.2, 0.3]);
    for pair in results.windows(2) {
        assert!(
            pair[1].confidence <= pair[0].confidence + 0.01,
            "confidence not non-increasing: {pair:?}"
        );
    }
    for r in &results {
        assert!((0.0..=1.0).contains(&r.confidence));
    }
}

#[test]
fn test_insufficient_data_round_trip() {
    let ten = vec![1.0; MIN_DATA_POINTS - 1];
    let eleven = vec![1.0; MIN_DATA_POINTS];
    let err = compare_samples(&ten, &eleven, &[0.0], 100).unwrap_err();
    let CompareError::InsufficientData { len_a, len_b, min } = err;
    assert_eq!((len_a, len_b, min), (10, 11, MIN_DATA_POINTS));
}

#[test]
fn test_clear_winner_detected_under_noise() {
    let fast = jittered(100.0, 25, 11);
    let slow = jittered(130.0, 25, 22);
    let results = compare_samples(&fast, &slow, &[0.0, 0.15], 2000).unwrap();
    // ~23% true median gain: near-certain at threshold 0, still a clear
    // majority at 15% despite the jitter.
    assert!(results[0].confidence > 0.95, "at 0: {results:?}");
    assert!(results[1].confidence > 0.5, "at 0.15: {results:?}");
}

#[test]
fn test_seeded_runs_are_bit_reproducible() {
    let a = jittered(100.0, 31, 5);
    let b = jittered(110.0, 31, 6);
    let thresholds = [-0.05, 0.0, 0.05, 0.1];
    let first = bootstrap_confidence(&a, &b, &thresholds, 3000, 0xDADA);
    let second = bootstrap_confidence(&a, &b, &thresholds, 3000, 0xDADA);
    assert_eq!(first, second);

    // A different base seed gives a different (but close) estimate.
    let other = bootstrap_confidence(&a, &b, &thresholds, 3000, 0xDADB);
    for ((_, c1), (_, c2)) in first.iter().zip(&other) {
        assert!((c1 - c2).abs() < 0.05, "estimates far apart: {c1} vs {c2}");
    }
}

#[test]
fn test_factor_thresholds_compose_with_compare() {
    let a = vec![100.0; 11];
    let b = vec![300.0; 11];
    // "Is A at least 2× faster?" == threshold 0.5; with constant inputs the
    // true gain is 2/3, so the answer is certain.
    let t = factor_to_threshold(2.0);
    let results = compare_samples(&a, &b, &[t], 500).unwrap();
    assert_eq!(results[0].confidence, 1.0);

    // 5× would need a gain of 0.8 and must be rejected just as certainly.
    let t = factor_to_threshold(5.0);
    let results = compare_samples(&a, &b, &[t], 500).unwrap();
    assert_eq!(results[0].confidence, 0.0);
}

#[test]
fn test_default_resamples_entry_point() {
    let a = jittered(100.0, 15, 1);
    let b = jittered(115.0, 15, 2);
    let results = compare_samples_default(&a, &b, &[0.0]).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].confidence > 0.9, "{results:?}");
    // DEFAULT_RESAMPLES keeps Monte-Carlo noise on a confidence well under 1%.
    let again = compare_samples_default(&a, &b, &[0.0]).unwrap();
    assert!((results[0].confidence - again[0].confidence).abs() < 0.05);
    let _ = DEFAULT_RESAMPLES;
}

#[test]
fn test_quick_median_feeds_engine_convention() {
    // Even-length input: the engine's medians use the upper-middle element.
    let mut xs = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(quick_median(&mut xs), 3.0);
    // The engine therefore reports certainty for data where interpolated
    // medians would be ambiguous: ranks decide, not averages.
    let a = vec![1.0; 12];
    let b = vec![2.0; 12];
    let results = compare_samples(&a, &b, &[0.4], 200).unwrap();
    assert_eq!(results[0].confidence, 1.0);
}
