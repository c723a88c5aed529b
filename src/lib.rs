//! fqperf - benchmark regression detection and reporting
//!
//! This library loads machine-generated benchmark measurements (native JSON
//! or Google Benchmark exports), normalizes them into a canonical model,
//! compares runs metric-by-metric with direction-aware thresholds, and
//! renders the outcome as Markdown reports, CI annotations, and shields.io
//! badges.

pub mod badge;
pub mod charts;
pub mod ci_output;
pub mod cli;
pub mod error;
pub mod loader;
pub mod markdown_output;
pub mod regression;
pub mod report;
