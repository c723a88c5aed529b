// Threshold-based performance regression detection
//
// Compares a current benchmark run against a baseline run metric-by-metric.
// Metric direction matters: for latency an increase is a regression, for
// throughput a decrease is. Thresholds are configurable globally and
// per-metric; classification is a pure function of the two input reports and
// the configuration.

mod config;
mod detector;

pub use config::DetectorConfig;
pub use detector::{RegressionDetector, RegressionReport, RegressionResult, Severity};
