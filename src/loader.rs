//! Benchmark result loading
//!
//! Two JSON dialects are supported: the native fqperf format produced by the
//! benchmark harness, and the JSON export of Google Benchmark. Both converge
//! on the canonical [`BenchmarkReport`] model; downstream code never sees the
//! difference.
//!
//! Individual field absences inside an otherwise valid document are never an
//! error and resolve to documented defaults, so older or partially-populated
//! producers remain compatible. Only a missing top-level section is fatal.

use crate::error::{FqperfError, Result};
use crate::report::{BenchmarkReport, BenchmarkResult, SystemMetadata};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Input dialect, declared by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Native fqperf JSON: `{ metadata: {...}, results: [...] }`
    Native,
    /// Google Benchmark JSON export: `{ context: {...}, benchmarks: [...] }`
    GoogleBenchmark,
}

/// Google Benchmark `context` section (subset we consume)
#[derive(Debug, Deserialize)]
struct GbContext {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    cpu_model: Option<String>,
    #[serde(default)]
    num_cpus: u32,
    #[serde(default)]
    library_build_type: Option<String>,
}

/// One entry of the Google Benchmark `benchmarks` array
#[derive(Debug, Deserialize)]
struct GbBenchmark {
    #[serde(default)]
    name: String,
    #[serde(default)]
    iterations: u64,
    /// Wall time per iteration in milliseconds
    #[serde(default)]
    real_time: f64,
    #[serde(default)]
    bytes_per_second: f64,
    #[serde(default)]
    items_per_second: f64,
}

/// Load a benchmark report from `path`, parsing it as `format`
pub fn load_report(path: &Path, format: InputFormat) -> Result<BenchmarkReport> {
    if !path.exists() {
        return Err(FqperfError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let document: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| FqperfError::MalformedInput {
            path: path.to_path_buf(),
            detail: format!("invalid JSON: {e}"),
        })?;

    match format {
        InputFormat::Native => load_native(path, &document),
        InputFormat::GoogleBenchmark => load_google_benchmark(path, &document),
    }
}

/// Require a top-level key, surfacing a `MalformedInput` naming it when absent
fn require_section<'a>(
    path: &Path,
    document: &'a serde_json::Value,
    key: &str,
) -> Result<&'a serde_json::Value> {
    document.get(key).ok_or_else(|| FqperfError::MalformedInput {
        path: path.to_path_buf(),
        detail: format!("missing required top-level key '{key}'"),
    })
}

fn load_native(path: &Path, document: &serde_json::Value) -> Result<BenchmarkReport> {
    let metadata_value = require_section(path, document, "metadata")?;
    let results_value = require_section(path, document, "results")?;

    let metadata: SystemMetadata =
        serde_json::from_value(metadata_value.clone()).map_err(|e| FqperfError::MalformedInput {
            path: path.to_path_buf(),
            detail: format!("invalid 'metadata' section: {e}"),
        })?;

    let results: Vec<BenchmarkResult> =
        serde_json::from_value(results_value.clone()).map_err(|e| FqperfError::MalformedInput {
            path: path.to_path_buf(),
            detail: format!("invalid 'results' section: {e}"),
        })?;

    Ok(BenchmarkReport { metadata, results })
}

fn load_google_benchmark(path: &Path, document: &serde_json::Value) -> Result<BenchmarkReport> {
    let context_value = require_section(path, document, "context")?;
    let benchmarks_value = require_section(path, document, "benchmarks")?;

    let context: GbContext =
        serde_json::from_value(context_value.clone()).map_err(|e| FqperfError::MalformedInput {
            path: path.to_path_buf(),
            detail: format!("invalid 'context' section: {e}"),
        })?;

    let benchmarks: Vec<GbBenchmark> =
        serde_json::from_value(benchmarks_value.clone()).map_err(|e| {
            FqperfError::MalformedInput {
                path: path.to_path_buf(),
                detail: format!("invalid 'benchmarks' section: {e}"),
            }
        })?;

    let metadata = SystemMetadata {
        timestamp: context.date.unwrap_or_else(|| "unknown".to_string()),
        cpu_model: context.cpu_model.unwrap_or_else(|| "unknown".to_string()),
        core_count: context.num_cpus,
        // Google Benchmark does not report OS details; the build type is the
        // closest provenance string it offers
        os_version: context
            .library_build_type
            .unwrap_or_else(|| "unknown".to_string()),
        ..Default::default()
    };

    let results = benchmarks
        .into_iter()
        .map(|b| BenchmarkResult {
            category: infer_category(&b.name).to_string(),
            // real_time is reported in milliseconds
            mean_time_ns: b.real_time * 1e6,
            throughput_mbps: b.bytes_per_second / 1e6,
            throughput_reads_per_sec: b.items_per_second,
            iterations: b.iterations,
            name: b.name,
            ..Default::default()
        })
        .collect();

    Ok(BenchmarkReport { metadata, results })
}

/// Infer a category from a Google Benchmark name by substring match.
///
/// Precedence: io > filter > stat, first match wins. This is a best-effort
/// heuristic keyed to the harness's naming convention, not a validated
/// classifier.
pub fn infer_category(name: &str) -> &'static str {
    if name.contains("Reader") || name.contains("Writer") {
        "io"
    } else if name.contains("Filter") {
        "filter"
    } else if name.contains("Stat") {
        "stat"
    } else {
        "unknown"
    }
}
