//! Optional chart rendering
//!
//! Chart output is strictly best-effort: the pipeline's classification and
//! text output never depend on it. The [`ChartBackend`] trait is the seam a
//! plotting implementation plugs into; when no backend is compiled in, the
//! null backend logs a warning and reports the artifact as absent.

use crate::report::BenchmarkReport;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A pluggable chart rendering backend.
///
/// Both operations return `None` (and must not fail the pipeline) when the
/// backend cannot produce an artifact.
pub trait ChartBackend {
    /// Render a throughput trend across several runs ordered by timestamp.
    ///
    /// Data points are grouped by result name; only names with at least two
    /// points form a plotted series.
    fn render_trend(&self, reports: &[BenchmarkReport]) -> Option<PathBuf>;

    /// Render a per-category comparison of one run, one sub-chart per
    /// category with horizontal bars of mean time
    fn render_comparison(&self, report: &BenchmarkReport) -> Option<PathBuf>;
}

/// Backend used when no plotting implementation is available
#[derive(Debug, Default)]
pub struct NullChartBackend;

impl ChartBackend for NullChartBackend {
    fn render_trend(&self, _reports: &[BenchmarkReport]) -> Option<PathBuf> {
        tracing::warn!("no chart backend available, skipping trend chart");
        None
    }

    fn render_comparison(&self, _report: &BenchmarkReport) -> Option<PathBuf> {
        tracing::warn!("no chart backend available, skipping comparison chart");
        None
    }
}

/// Select the chart backend for this build
pub fn default_backend() -> Box<dyn ChartBackend> {
    Box::new(NullChartBackend)
}

/// Extract trend series from a set of runs: result name → (timestamp,
/// throughput MB/s) points, runs ordered by timestamp, series with fewer
/// than two points dropped.
///
/// Shared between backends so they agree on what gets plotted.
pub fn trend_series(reports: &[BenchmarkReport]) -> BTreeMap<String, Vec<(String, f64)>> {
    let mut ordered: Vec<&BenchmarkReport> = reports.iter().collect();
    // ISO-8601 timestamps sort correctly as strings
    ordered.sort_by(|a, b| a.metadata.timestamp.cmp(&b.metadata.timestamp));

    let mut series: BTreeMap<String, Vec<(String, f64)>> = BTreeMap::new();
    for report in ordered {
        for r in &report.results {
            if r.throughput_mbps > 0.0 {
                series
                    .entry(r.name.clone())
                    .or_default()
                    .push((report.metadata.timestamp.clone(), r.throughput_mbps));
            }
        }
    }

    series.retain(|_, points| points.len() >= 2);
    series
}

/// Group one run's results by category for comparison charts, categories
/// sorted lexicographically
pub fn comparison_groups(
    report: &BenchmarkReport,
) -> BTreeMap<String, Vec<(String, f64)>> {
    let mut groups: BTreeMap<String, Vec<(String, f64)>> = BTreeMap::new();
    for r in &report.results {
        groups
            .entry(r.category.clone())
            .or_default()
            .push((r.name.clone(), r.mean_time_ns / 1e6));
    }
    groups
}
