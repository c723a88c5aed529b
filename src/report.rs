//! Canonical benchmark result model
//!
//! Both input dialects (native fqperf JSON and Google Benchmark JSON) are
//! normalized into these types by the loader, so the detector and renderers
//! never see schema differences.

use serde::{Deserialize, Serialize};

fn default_thread_count() -> u32 {
    1
}

fn unknown() -> String {
    "unknown".to_string()
}

/// One measured operation within a benchmark run.
///
/// A value of exactly zero in a timing or throughput field means "not
/// measured", not "measured as zero". Consumers must skip such fields rather
/// than compare against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark name, unique within a report
    #[serde(default)]
    pub name: String,
    /// Category tag (e.g., "io", "filter", "stat"), inferred or explicit
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub iterations: u64,
    /// Mean execution time in nanoseconds (0 = unknown)
    #[serde(default, rename = "meanTimeNs")]
    pub mean_time_ns: f64,
    #[serde(default, rename = "stdDevNs")]
    pub std_dev_ns: f64,
    #[serde(default, rename = "minTimeNs")]
    pub min_time_ns: f64,
    #[serde(default, rename = "maxTimeNs")]
    pub max_time_ns: f64,
    /// Throughput in MB/s (0 = not applicable)
    #[serde(default, rename = "throughputMBps")]
    pub throughput_mbps: f64,
    /// Throughput in reads per second (0 = not applicable)
    #[serde(default, rename = "throughputReadsPerSec")]
    pub throughput_reads_per_sec: f64,
    #[serde(default, rename = "peakMemoryBytes")]
    pub peak_memory_bytes: u64,
    #[serde(default = "default_thread_count", rename = "threadCount")]
    pub thread_count: u32,
    #[serde(default, rename = "inputSize")]
    pub input_size: u64,
}

impl Default for BenchmarkResult {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            iterations: 0,
            mean_time_ns: 0.0,
            std_dev_ns: 0.0,
            min_time_ns: 0.0,
            max_time_ns: 0.0,
            throughput_mbps: 0.0,
            throughput_reads_per_sec: 0.0,
            peak_memory_bytes: 0,
            thread_count: 1,
            input_size: 0,
        }
    }
}

/// Provenance of a benchmark run.
///
/// Descriptive only; never participates in regression math. Every field
/// defaults to an "unknown" sentinel (or 0) when absent from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMetadata {
    /// ISO-8601 timestamp of the run
    #[serde(default = "unknown")]
    pub timestamp: String,
    #[serde(default = "unknown", rename = "gitCommit")]
    pub git_commit: String,
    #[serde(default = "unknown", rename = "gitBranch")]
    pub git_branch: String,
    #[serde(default = "unknown", rename = "cpuModel")]
    pub cpu_model: String,
    #[serde(default, rename = "coreCount")]
    pub core_count: u32,
    #[serde(default, rename = "memoryBytes")]
    pub memory_bytes: u64,
    #[serde(default = "unknown", rename = "osVersion")]
    pub os_version: String,
    #[serde(default = "unknown", rename = "compilerVersion")]
    pub compiler_version: String,
}

impl Default for SystemMetadata {
    fn default() -> Self {
        Self {
            timestamp: unknown(),
            git_commit: unknown(),
            git_branch: unknown(),
            cpu_model: unknown(),
            core_count: 0,
            memory_bytes: 0,
            os_version: unknown(),
            compiler_version: unknown(),
        }
    }
}

/// A complete benchmark run: provenance plus an ordered sequence of results.
///
/// Result order follows input order. It is not semantically significant but
/// is preserved for deterministic rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub metadata: SystemMetadata,
    #[serde(default)]
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Look up a result by exact name
    pub fn result_by_name(&self, name: &str) -> Option<&BenchmarkResult> {
        self.results.iter().find(|r| r.name == name)
    }
}
