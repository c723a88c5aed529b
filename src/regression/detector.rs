// Metric comparison and severity classification

use crate::regression::config::DetectorConfig;
use crate::report::{BenchmarkReport, BenchmarkResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a single metric comparison, totally ordered OK < WARNING < CRITICAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

/// The comparison of one metric of one named benchmark between two runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    pub benchmark_name: String,
    pub metric_name: String,
    pub baseline_value: f64,
    pub current_value: f64,
    /// Signed percent change, (current - baseline) / baseline * 100, in its
    /// raw sign: a 15% throughput improvement is stored as +15.0 even though
    /// it is a favorable change
    pub change_percent: f64,
    pub severity: Severity,
}

impl RegressionResult {
    /// True when the severity flags a worsening (WARNING or CRITICAL)
    pub fn is_regression(&self) -> bool {
        matches!(self.severity, Severity::Warning | Severity::Critical)
    }
}

/// Result of comparing two full benchmark reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionReport {
    /// Commit identifier of the baseline run, verbatim from its metadata
    pub baseline_commit: String,
    /// Commit identifier of the current run, verbatim from its metadata
    pub current_commit: String,
    pub results: Vec<RegressionResult>,
}

impl RegressionReport {
    pub fn has_warning(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Warning)
    }

    pub fn has_critical(&self) -> bool {
        self.results
            .iter()
            .any(|r| r.severity == Severity::Critical)
    }

    pub fn has_regression(&self) -> bool {
        self.has_warning() || self.has_critical()
    }
}

/// Compares benchmark reports metric-by-metric using direction-aware thresholds
///
/// # Example
/// ```
/// use fqperf::regression::{DetectorConfig, RegressionDetector, Severity};
///
/// let detector = RegressionDetector::new(DetectorConfig::default());
/// let result = detector.compare_metric("BM_Stat_Full", "mean_time_ns", 1000.0, 1100.0, false);
/// assert_eq!(result.severity, Severity::Warning); // +10% latency, boundary inclusive
/// ```
#[derive(Debug, Clone)]
pub struct RegressionDetector {
    config: DetectorConfig,
}

impl RegressionDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Compare one metric of one benchmark between two runs.
    ///
    /// `higher_is_better` selects the regression direction: for throughput a
    /// drop is a regression, for execution time an increase is. The stored
    /// percent change keeps its raw sign regardless of direction.
    pub fn compare_metric(
        &self,
        benchmark_name: &str,
        metric_name: &str,
        baseline_value: f64,
        current_value: f64,
        higher_is_better: bool,
    ) -> RegressionResult {
        let change = if baseline_value == 0.0 {
            0.0
        } else {
            (current_value - baseline_value) / baseline_value
        };

        // Normalize so a positive value always means "got worse"
        let regression_change = if higher_is_better { -change } else { change };

        let (warning_threshold, critical_threshold) = self.config.thresholds_for(metric_name);

        // CRITICAL first: a change meeting both inclusive bounds is CRITICAL
        let severity = if regression_change >= critical_threshold {
            Severity::Critical
        } else if regression_change >= warning_threshold {
            Severity::Warning
        } else {
            Severity::Ok
        };

        RegressionResult {
            benchmark_name: benchmark_name.to_string(),
            metric_name: metric_name.to_string(),
            baseline_value,
            current_value,
            change_percent: change * 100.0,
            severity,
        }
    }

    /// Compare all comparable metrics of one matched benchmark pair.
    ///
    /// A metric is compared only when its baseline value is non-zero; zero
    /// means "not measured" and is skipped rather than treated as a value.
    pub fn compare_results(
        &self,
        baseline: &BenchmarkResult,
        current: &BenchmarkResult,
    ) -> Vec<RegressionResult> {
        let mut results = Vec::new();

        if baseline.mean_time_ns > 0.0 {
            results.push(self.compare_metric(
                &baseline.name,
                "mean_time_ns",
                baseline.mean_time_ns,
                current.mean_time_ns,
                false,
            ));
        }

        if baseline.throughput_mbps > 0.0 {
            results.push(self.compare_metric(
                &baseline.name,
                "throughput_mbps",
                baseline.throughput_mbps,
                current.throughput_mbps,
                true,
            ));
        }

        if baseline.throughput_reads_per_sec > 0.0 {
            results.push(self.compare_metric(
                &baseline.name,
                "throughput_reads_per_sec",
                baseline.throughput_reads_per_sec,
                current.throughput_reads_per_sec,
                true,
            ));
        }

        results
    }

    /// Compare two full reports.
    ///
    /// Only benchmarks present in both reports (exact name match) are
    /// compared; names unique to either side are skipped so that evolving
    /// benchmark suites never fail the comparison. Output order follows the
    /// current report's result order.
    pub fn compare_reports(
        &self,
        baseline: &BenchmarkReport,
        current: &BenchmarkReport,
    ) -> RegressionReport {
        let baseline_map: HashMap<&str, &BenchmarkResult> = baseline
            .results
            .iter()
            .map(|r| (r.name.as_str(), r))
            .collect();

        let mut all_results = Vec::new();

        for current_result in &current.results {
            if let Some(baseline_result) = baseline_map.get(current_result.name.as_str()) {
                all_results.extend(self.compare_results(baseline_result, current_result));
            }
        }

        RegressionReport {
            baseline_commit: baseline.metadata.git_commit.clone(),
            current_commit: current.metadata.git_commit.clone(),
            results: all_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> RegressionDetector {
        RegressionDetector::new(DetectorConfig::default())
    }

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn test_compare_metric_latency_warning_at_boundary() {
        // +10% latency increase lands exactly on the warning threshold
        let r = detector().compare_metric("bench", "mean_time_ns", 1000.0, 1100.0, false);
        assert_eq!(r.severity, Severity::Warning);
        assert!((r.change_percent - 10.0).abs() < 1e-9);
        assert!(r.is_regression());
    }

    #[test]
    fn test_compare_metric_just_below_warning_is_ok() {
        let r = detector().compare_metric("bench", "mean_time_ns", 1000.0, 1099.0, false);
        assert_eq!(r.severity, Severity::Ok);
        assert!(!r.is_regression());
    }

    #[test]
    fn test_compare_metric_critical_boundary_inclusive() {
        let r = detector().compare_metric("bench", "mean_time_ns", 1000.0, 1200.0, false);
        assert_eq!(r.severity, Severity::Critical);
    }

    #[test]
    fn test_compare_metric_throughput_drop_critical() {
        // 400 -> 310 MB/s is a 22.5% drop
        let r = detector().compare_metric("bench", "throughput_mbps", 400.0, 310.0, true);
        assert_eq!(r.severity, Severity::Critical);
        assert!((r.change_percent - (-22.5)).abs() < 1e-9);
    }

    #[test]
    fn test_compare_metric_throughput_improvement_keeps_raw_sign() {
        let r = detector().compare_metric("bench", "throughput_mbps", 400.0, 460.0, true);
        assert_eq!(r.severity, Severity::Ok);
        assert!((r.change_percent - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_metric_direction_flip() {
        // Same magnitude of decrease: improvement for latency, regression for
        // throughput
        let d = detector();
        let as_latency = d.compare_metric("bench", "mean_time_ns", 1000.0, 800.0, false);
        let as_throughput = d.compare_metric("bench", "throughput_mbps", 1000.0, 800.0, true);
        assert_eq!(as_latency.severity, Severity::Ok);
        assert_eq!(as_throughput.severity, Severity::Critical);
        assert_eq!(as_latency.change_percent, as_throughput.change_percent);
    }

    #[test]
    fn test_compare_metric_zero_baseline_is_no_change() {
        let r = detector().compare_metric("bench", "mean_time_ns", 0.0, 500.0, false);
        assert_eq!(r.change_percent, 0.0);
        assert_eq!(r.severity, Severity::Ok);
    }

    #[test]
    fn test_custom_threshold_precedence() {
        let mut config = DetectorConfig::default();
        config
            .custom_thresholds
            .insert("throughput_mbps".to_string(), (0.02, 0.05));
        let d = RegressionDetector::new(config);

        // A 3% throughput drop is below the global 10% warning but above the
        // per-metric 2% override
        let r = d.compare_metric("bench", "throughput_mbps", 100.0, 97.0, true);
        assert_eq!(r.severity, Severity::Warning);

        // Other metrics still use the global thresholds
        let r = d.compare_metric("bench", "mean_time_ns", 100.0, 103.0, false);
        assert_eq!(r.severity, Severity::Ok);
    }

    #[test]
    fn test_compare_results_skips_unmeasured_metrics() {
        let baseline = BenchmarkResult {
            name: "BM_Stat_Full".to_string(),
            mean_time_ns: 1000.0,
            throughput_mbps: 0.0,
            throughput_reads_per_sec: 0.0,
            ..Default::default()
        };
        let current = BenchmarkResult {
            name: "BM_Stat_Full".to_string(),
            mean_time_ns: 1050.0,
            throughput_mbps: 300.0,
            ..Default::default()
        };

        let results = detector().compare_results(&baseline, &current);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metric_name, "mean_time_ns");
    }
}
