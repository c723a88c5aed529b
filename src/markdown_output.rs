//! Markdown rendering for regression and benchmark reports
//!
//! Three surfaces share one decision model: the full regression report, the
//! per-run performance report, and the compact README summary block.

use crate::error::{FqperfError, Result};
use crate::regression::{RegressionReport, RegressionResult, Severity};
use crate::report::BenchmarkReport;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// README markers delimiting the generated performance block
pub const BENCHMARK_START_MARKER: &str = "<!-- BENCHMARK_START -->";
pub const BENCHMARK_END_MARKER: &str = "<!-- BENCHMARK_END -->";

/// Key benchmarks surfaced in the README summary table
const KEY_BENCHMARKS: [&str; 4] = [
    "BM_FastQReader_Medium",
    "BM_FastQWriter_Medium",
    "BM_Filter_Combined",
    "BM_Stat_Full",
];

fn push_result_table(lines: &mut Vec<String>, results: &[&RegressionResult]) {
    lines.push("| Benchmark | Metric | Baseline | Current | Change |".to_string());
    lines.push("|-----------|--------|----------|---------|--------|".to_string());
    for r in results {
        lines.push(format!(
            "| {} | {} | {:.2} | {:.2} | {:+.1}% |",
            r.benchmark_name, r.metric_name, r.baseline_value, r.current_value, r.change_percent
        ));
    }
    lines.push(String::new());
}

/// Render a regression report as human-readable Markdown.
///
/// The banner reflects the highest severity present. The "Passed" table is
/// emitted only in verbose mode.
pub fn format_report(report: &RegressionReport, verbose: bool) -> String {
    let mut lines = vec![
        "# Performance Regression Report".to_string(),
        String::new(),
        format!("**Baseline:** {}", report.baseline_commit),
        format!("**Current:** {}", report.current_commit),
        String::new(),
    ];

    if report.has_critical() {
        lines.push("⛔ **CRITICAL REGRESSIONS DETECTED**".to_string());
    } else if report.has_warning() {
        lines.push("⚠️ **Warnings detected**".to_string());
    } else {
        lines.push("✅ **No regressions detected**".to_string());
    }
    lines.push(String::new());

    let critical: Vec<&RegressionResult> = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Critical)
        .collect();
    let warnings: Vec<&RegressionResult> = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Warning)
        .collect();
    let ok: Vec<&RegressionResult> = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Ok)
        .collect();

    if !critical.is_empty() {
        lines.push("## Critical Regressions".to_string());
        lines.push(String::new());
        push_result_table(&mut lines, &critical);
    }

    if !warnings.is_empty() {
        lines.push("## Warnings".to_string());
        lines.push(String::new());
        push_result_table(&mut lines, &warnings);
    }

    if verbose && !ok.is_empty() {
        lines.push("## Passed".to_string());
        lines.push(String::new());
        push_result_table(&mut lines, &ok);
    }

    lines.join("\n")
}

/// Render a single benchmark run as a full Markdown report: system info table
/// plus one results table per category, categories sorted lexicographically
pub fn generate_markdown_report(report: &BenchmarkReport) -> String {
    let mut lines = vec![
        "# fqperf Performance Report".to_string(),
        String::new(),
        format!("**Generated:** {}", report.metadata.timestamp),
        format!(
            "**Git Commit:** {} ({})",
            report.metadata.git_commit, report.metadata.git_branch
        ),
        String::new(),
        "## System Information".to_string(),
        String::new(),
        "| Property | Value |".to_string(),
        "|----------|-------|".to_string(),
        format!("| CPU | {} |", report.metadata.cpu_model),
        format!("| Cores | {} |", report.metadata.core_count),
        format!("| Memory | {} |", format_bytes(report.metadata.memory_bytes)),
        format!("| OS | {} |", report.metadata.os_version),
        format!("| Compiler | {} |", report.metadata.compiler_version),
        String::new(),
        "## Benchmark Results".to_string(),
        String::new(),
    ];

    // BTreeMap gives the lexicographic category order for free
    let mut categories: BTreeMap<&str, Vec<&crate::report::BenchmarkResult>> = BTreeMap::new();
    for r in &report.results {
        categories.entry(r.category.as_str()).or_default().push(r);
    }

    for (category, results) in &categories {
        lines.push(format!("### {} Benchmarks", category.to_uppercase()));
        lines.push(String::new());
        lines.push("| Benchmark | Time (ms) | Throughput | Iterations |".to_string());
        lines.push("|-----------|-----------|------------|------------|".to_string());

        for r in results {
            let time_ms = r.mean_time_ns / 1e6;
            let throughput = if r.throughput_mbps > 0.0 {
                format!("{:.2} MB/s", r.throughput_mbps)
            } else {
                "-".to_string()
            };
            lines.push(format!(
                "| {} | {:.2} | {} | {} |",
                r.name, time_ms, throughput, r.iterations
            ));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Generate the compact summary table used in the README.
///
/// Only the key benchmarks are listed, with names simplified for prose
/// (the `BM_` prefix dropped and underscores spaced).
pub fn generate_summary_table(report: &BenchmarkReport) -> String {
    let mut lines = vec![
        "| Operation | Throughput | Time |".to_string(),
        "|-----------|------------|------|".to_string(),
    ];

    for r in &report.results {
        if KEY_BENCHMARKS.iter().any(|key| r.name.contains(key)) {
            let time_ms = r.mean_time_ns / 1e6;
            let throughput = if r.throughput_mbps > 0.0 {
                format!("{:.1} MB/s", r.throughput_mbps)
            } else {
                "-".to_string()
            };
            let name = r.name.replace("BM_", "").replace('_', " ");
            lines.push(format!("| {name} | {throughput} | {time_ms:.1} ms |"));
        }
    }

    lines.join("\n")
}

/// Generate the README-embeddable performance section
pub fn generate_readme_section(report: &BenchmarkReport) -> String {
    format!(
        "## Performance\n\
         \n\
         Benchmark results on {} ({} cores):\n\
         \n\
         {}\n\
         \n\
         *Tested with 100K reads, 150bp read length. See [full benchmark \
         report](docs/performance/benchmark-report.md) for details.*\n",
        report.metadata.cpu_model,
        report.metadata.core_count,
        generate_summary_table(report)
    )
}

/// Replace the marked performance block in a README file, appending the block
/// at the end when the markers are absent
pub fn update_readme(readme_path: &Path, report: &BenchmarkReport) -> Result<()> {
    if !readme_path.exists() {
        return Err(FqperfError::InputNotFound {
            path: readme_path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(readme_path)?;

    let new_section = format!(
        "{BENCHMARK_START_MARKER}\n{}\n{BENCHMARK_END_MARKER}",
        generate_readme_section(report)
    );

    let updated = match (
        content.find(BENCHMARK_START_MARKER),
        content.find(BENCHMARK_END_MARKER),
    ) {
        (Some(start), Some(end)) if start <= end => {
            let after = end + BENCHMARK_END_MARKER.len();
            format!("{}{}{}", &content[..start], new_section, &content[after..])
        }
        _ => format!("{content}\n\n{new_section}\n"),
    };

    fs::write(readme_path, updated).map_err(|source| FqperfError::OutputWriteFailure {
        path: readme_path.to_path_buf(),
        source,
    })
}

/// Humanize a byte count; zero renders as "Unknown"
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "Unknown".to_string();
    }

    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} PB")
}
