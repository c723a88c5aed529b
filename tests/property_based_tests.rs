//! Property-based tests for the regression classification pipeline
//!
//! Core properties covered:
//! 1. Percent change is exact and direction-independent
//! 2. Direction normalization flips classification for the same change
//! 3. Threshold bounds are inclusive
//! 4. Badge rating is monotone in throughput
//! 5. Report comparison never invents results for unmatched names

use fqperf::badge;
use fqperf::regression::{DetectorConfig, RegressionDetector, Severity};
use fqperf::report::{BenchmarkReport, BenchmarkResult, SystemMetadata};
use proptest::prelude::*;

fn tier(color: &str) -> u8 {
    match color {
        "red" => 0,
        "yellow" => 1,
        "green" => 2,
        "brightgreen" => 3,
        other => panic!("unexpected color {other}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_change_percent_exact_and_direction_independent(
        baseline in 1.0f64..1e9,
        current in 0.0f64..1e9,
        higher_is_better in any::<bool>(),
    ) {
        let detector = RegressionDetector::new(DetectorConfig::default());
        let result = detector.compare_metric("b", "m", baseline, current, higher_is_better);

        let expected = (current - baseline) / baseline * 100.0;
        prop_assert_eq!(result.change_percent, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_direction_flip_swaps_classification(
        baseline in 1.0f64..1e6,
        // A drop of 25-90%: comfortably past the critical threshold
        drop_fraction in 0.25f64..0.9,
    ) {
        let current = baseline * (1.0 - drop_fraction);
        let detector = RegressionDetector::new(DetectorConfig::default());

        // As a lower-is-better metric the drop is an improvement
        let as_latency = detector.compare_metric("b", "m", baseline, current, false);
        prop_assert_eq!(as_latency.severity, Severity::Ok);

        // As a higher-is-better metric the same drop is a critical regression
        let as_throughput = detector.compare_metric("b", "m", baseline, current, true);
        prop_assert_eq!(as_throughput.severity, Severity::Critical);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_severity_monotone_in_regression_change(
        baseline in 1.0f64..1e6,
        worse_a in 0.0f64..0.5,
        worse_b in 0.0f64..0.5,
    ) {
        let detector = RegressionDetector::new(DetectorConfig::default());
        let (small, large) = if worse_a <= worse_b {
            (worse_a, worse_b)
        } else {
            (worse_b, worse_a)
        };

        let r_small = detector.compare_metric("b", "m", baseline, baseline * (1.0 + small), false);
        let r_large = detector.compare_metric("b", "m", baseline, baseline * (1.0 + large), false);
        prop_assert!(r_small.severity <= r_large.severity);
    }
}

#[test]
fn test_threshold_bounds_inclusive() {
    let detector = RegressionDetector::new(DetectorConfig::default());

    // Exactly at the warning bound classifies WARNING
    let at_warning = detector.compare_metric("b", "m", 1000.0, 1100.0, false);
    assert_eq!(at_warning.severity, Severity::Warning);

    // One unit below classifies at the next lower severity
    let below_warning = detector.compare_metric("b", "m", 1000.0, 1099.999, false);
    assert_eq!(below_warning.severity, Severity::Ok);

    let at_critical = detector.compare_metric("b", "m", 1000.0, 1200.0, false);
    assert_eq!(at_critical.severity, Severity::Critical);

    let below_critical = detector.compare_metric("b", "m", 1000.0, 1199.999, false);
    assert_eq!(below_critical.severity, Severity::Warning);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_badge_rating_monotone(
        a in 0.0f64..2000.0,
        b in 0.0f64..2000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier(badge::rate(low).color) <= tier(badge::rate(high).color));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_unmatched_names_produce_no_results(
        baseline_names in prop::collection::hash_set("[a-z]{3,8}", 1..10),
        current_names in prop::collection::hash_set("[A-Z]{3,8}", 1..10),
    ) {
        // Disjoint by construction (different character classes)
        let make = |names: &std::collections::HashSet<String>| BenchmarkReport {
            metadata: SystemMetadata::default(),
            results: names
                .iter()
                .map(|name| BenchmarkResult {
                    name: name.clone(),
                    mean_time_ns: 1000.0,
                    ..Default::default()
                })
                .collect(),
        };

        let detector = RegressionDetector::new(DetectorConfig::default());
        let report = detector.compare_reports(&make(&baseline_names), &make(&current_names));
        prop_assert!(report.results.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_matched_names_bound_result_count(
        values in prop::collection::vec((1.0f64..1e6, 1.0f64..1e6), 1..10),
    ) {
        // Every matched benchmark with one measured metric yields exactly one
        // result
        let make = |pick: fn(&(f64, f64)) -> f64, values: &[(f64, f64)]| BenchmarkReport {
            metadata: SystemMetadata::default(),
            results: values
                .iter()
                .enumerate()
                .map(|(i, pair)| BenchmarkResult {
                    name: format!("bench_{i}"),
                    mean_time_ns: pick(pair),
                    ..Default::default()
                })
                .collect(),
        };

        let baseline = make(|p| p.0, &values);
        let current = make(|p| p.1, &values);
        let detector = RegressionDetector::new(DetectorConfig::default());
        let report = detector.compare_reports(&baseline, &current);
        prop_assert_eq!(report.results.len(), values.len());
    }
}
