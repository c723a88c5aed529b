//! shields.io performance badge generation
//!
//! A report's aggregate throughput maps onto a fixed four-tier rating, then
//! gets encoded as a badge URL, a Markdown image, or a shields.io "endpoint"
//! JSON document.

use crate::report::BenchmarkReport;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Default link target for the Markdown performance badge
pub const DEFAULT_BADGE_LINK: &str = "docs/performance/benchmark-report.md";

/// Aggregate performance rating derived from throughput
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    /// shields.io color name
    pub color: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Rate a throughput value against fixed breakpoints.
///
/// Inclusive lower bounds, checked from highest tier down: ≥500 MB/s is
/// excellent, ≥200 good, ≥100 fair, anything below needs improvement.
pub fn rate(throughput_mbps: f64) -> Rating {
    if throughput_mbps >= 500.0 {
        Rating {
            color: "brightgreen",
            label: "excellent",
        }
    } else if throughput_mbps >= 200.0 {
        Rating {
            color: "green",
            label: "good",
        }
    } else if throughput_mbps >= 100.0 {
        Rating {
            color: "yellow",
            label: "fair",
        }
    } else {
        Rating {
            color: "red",
            label: "needs improvement",
        }
    }
}

/// Arithmetic mean of all non-zero throughput values in a report.
///
/// Zero-valued throughputs mean "not measured" and are excluded; a report
/// with no measured throughput averages to 0 and lands in the lowest tier.
pub fn average_throughput(report: &BenchmarkReport) -> f64 {
    let throughputs: Vec<f64> = report
        .results
        .iter()
        .map(|r| r.throughput_mbps)
        .filter(|&t| t > 0.0)
        .collect();

    if throughputs.is_empty() {
        0.0
    } else {
        throughputs.iter().sum::<f64>() / throughputs.len() as f64
    }
}

/// Build a shields.io static badge URL with escaped path components
pub fn badge_url(label: &str, message: &str, color: &str) -> String {
    let label_encoded = utf8_percent_encode(label, NON_ALPHANUMERIC);
    let message_encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("https://img.shields.io/badge/{label_encoded}-{message_encoded}-{color}")
}

/// Build a Markdown badge image, optionally hyperlinked
pub fn badge_markdown(label: &str, message: &str, color: &str, link: Option<&str>) -> String {
    let url = badge_url(label, message, color);
    match link {
        Some(link) => format!("[![{label}]({url})]({link})"),
        None => format!("![{label}]({url})"),
    }
}

/// Build the standard performance badge for a throughput value, linked to
/// the full benchmark report
pub fn performance_badge_markdown(throughput_mbps: f64) -> String {
    let rating = rate(throughput_mbps);
    let message = format!("{throughput_mbps:.0} MB/s ({})", rating.label);
    badge_markdown("performance", &message, rating.color, Some(DEFAULT_BADGE_LINK))
}

/// shields.io endpoint JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeEndpoint {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    pub color: String,
}

impl BadgeEndpoint {
    pub fn new(label: &str, message: &str, color: &str) -> Self {
        Self {
            schema_version: 1,
            label: label.to_string(),
            message: message.to_string(),
            color: color.to_string(),
        }
    }
}

/// Build the endpoint JSON document for a report's average throughput
pub fn performance_badge_endpoint(throughput_mbps: f64) -> BadgeEndpoint {
    let rating = rate(throughput_mbps);
    BadgeEndpoint::new(
        "performance",
        &format!("{throughput_mbps:.0} MB/s"),
        rating.color,
    )
}
