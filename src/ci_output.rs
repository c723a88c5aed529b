//! CI annotation output (GitHub Actions workflow command format)
//!
//! One `::error::` line per CRITICAL result, one `::warning::` line per
//! WARNING result. When the report carries no regression at all, exactly one
//! `::notice::` line is emitted instead.

use crate::regression::{RegressionReport, Severity};

/// Render a regression report as CI annotation lines
pub fn format_ci_output(report: &RegressionReport) -> String {
    let mut lines = Vec::new();

    for r in &report.results {
        match r.severity {
            Severity::Critical => lines.push(format!(
                "::error::Performance regression in {}: {} changed by {:+.1}%",
                r.benchmark_name, r.metric_name, r.change_percent
            )),
            Severity::Warning => lines.push(format!(
                "::warning::Performance warning in {}: {} changed by {:+.1}%",
                r.benchmark_name, r.metric_name, r.change_percent
            )),
            Severity::Ok => {}
        }
    }

    if !report.has_regression() {
        lines.push("::notice::All performance checks passed".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::RegressionResult;

    fn result(name: &str, metric: &str, change: f64, severity: Severity) -> RegressionResult {
        RegressionResult {
            benchmark_name: name.to_string(),
            metric_name: metric.to_string(),
            baseline_value: 100.0,
            current_value: 100.0 + change,
            change_percent: change,
            severity,
        }
    }

    fn report(results: Vec<RegressionResult>) -> RegressionReport {
        RegressionReport {
            baseline_commit: "base123".to_string(),
            current_commit: "cur456".to_string(),
            results,
        }
    }

    #[test]
    fn test_ci_output_critical_and_warning_lines() {
        let report = report(vec![
            result("BM_Crit", "mean_time_ns", 30.0, Severity::Critical),
            result("BM_Warn", "throughput_mbps", -12.0, Severity::Warning),
            result("BM_Fine", "mean_time_ns", 1.0, Severity::Ok),
        ]);

        let output = format_ci_output(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "::error::Performance regression in BM_Crit: mean_time_ns changed by +30.0%"
        );
        assert_eq!(
            lines[1],
            "::warning::Performance warning in BM_Warn: throughput_mbps changed by -12.0%"
        );
        assert!(!output.contains("::notice::"));
    }

    #[test]
    fn test_ci_output_all_passed_single_notice() {
        let report = report(vec![
            result("BM_A", "mean_time_ns", 1.0, Severity::Ok),
            result("BM_B", "throughput_mbps", 2.0, Severity::Ok),
        ]);

        let output = format_ci_output(&report);
        assert_eq!(output, "::notice::All performance checks passed");
    }

    #[test]
    fn test_ci_output_empty_report_still_notices() {
        let output = format_ci_output(&report(vec![]));
        assert_eq!(output, "::notice::All performance checks passed");
    }
}
