// Configuration for threshold-based regression detection

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the regression detector
///
/// Thresholds are fractions of the baseline value, applied to the
/// direction-normalized change (a positive normalized change always means
/// "got worse"). Both bounds are inclusive.
///
/// # Example
/// ```
/// use fqperf::regression::DetectorConfig;
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.warning_threshold, 0.10); // 10% worsening
/// assert_eq!(config.critical_threshold, 0.20); // 20% worsening
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Worsening fraction at which a metric is flagged WARNING (default 0.10)
    pub warning_threshold: f64,

    /// Worsening fraction at which a metric is flagged CRITICAL (default 0.20)
    pub critical_threshold: f64,

    /// Per-metric overrides: metric name → (warning, critical).
    ///
    /// An entry here takes precedence over the global thresholds for that
    /// metric across all benchmarks.
    #[serde(default)]
    pub custom_thresholds: HashMap<String, (f64, f64)>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            warning_threshold: 0.10,
            critical_threshold: 0.20,
            custom_thresholds: HashMap::new(),
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with explicit global thresholds
    pub fn with_thresholds(warning_threshold: f64, critical_threshold: f64) -> Self {
        Self {
            warning_threshold,
            critical_threshold,
            custom_thresholds: HashMap::new(),
        }
    }

    /// Resolve the `(warning, critical)` pair for a metric name
    pub fn thresholds_for(&self, metric_name: &str) -> (f64, f64) {
        self.custom_thresholds
            .get(metric_name)
            .copied()
            .unwrap_or((self.warning_threshold, self.critical_threshold))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.warning_threshold < 0.0 {
            return Err(format!(
                "warning_threshold must be non-negative, got {}",
                self.warning_threshold
            ));
        }

        if self.critical_threshold < self.warning_threshold {
            return Err(format!(
                "critical_threshold ({}) must be >= warning_threshold ({})",
                self.critical_threshold, self.warning_threshold
            ));
        }

        for (metric, (warning, critical)) in &self.custom_thresholds {
            if *warning < 0.0 || *critical < *warning {
                return Err(format!(
                    "invalid thresholds for metric '{metric}': ({warning}, {critical})"
                ));
            }
        }

        Ok(())
    }
}
