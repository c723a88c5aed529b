//! CLI argument parsing for fqperf

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the `report` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Full Markdown report written to the output directory
    Markdown,
    /// Compact summary table on stdout
    Summary,
    /// README-embeddable performance section on stdout
    Readme,
}

/// Output format for the `badge` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BadgeFormat {
    /// shields.io static badge URL
    Url,
    /// Markdown badge image
    Markdown,
    /// shields.io endpoint JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fqperf")]
#[command(version)]
#[command(about = "Benchmark regression detection and reporting for FASTQ pipelines", long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare a current benchmark run against a baseline
    Detect {
        /// Baseline JSON file
        baseline: PathBuf,

        /// Current JSON file
        current: PathBuf,

        /// Warning threshold as a fraction (default: 0.10 = 10%)
        #[arg(
            long = "warning-threshold",
            value_name = "FRACTION",
            default_value = "0.10"
        )]
        warning_threshold: f64,

        /// Critical threshold as a fraction (default: 0.20 = 20%)
        #[arg(
            long = "critical-threshold",
            value_name = "FRACTION",
            default_value = "0.20"
        )]
        critical_threshold: f64,

        /// Emit CI annotations (GitHub Actions format) instead of Markdown
        #[arg(long)]
        ci: bool,

        /// Include passed results in the report
        #[arg(long)]
        verbose: bool,

        /// Inputs are Google Benchmark JSON exports
        #[arg(long = "google-benchmark")]
        google_benchmark: bool,
    },

    /// Render a single benchmark run as a report
    Report {
        /// Input JSON file (defaults to the newest collected result)
        input: Option<PathBuf>,

        /// Output directory for generated reports
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "markdown")]
        format: ReportFormat,

        /// Input is a Google Benchmark JSON export
        #[arg(long = "google-benchmark")]
        google_benchmark: bool,

        /// Update the marked performance block in this README file
        #[arg(long = "update-readme", value_name = "FILE")]
        update_readme: Option<PathBuf>,

        /// Also render charts (best-effort, skipped without a backend)
        #[arg(long)]
        charts: bool,
    },

    /// Generate a shields.io performance badge
    Badge {
        /// Input JSON file (defaults to the newest collected result)
        input: Option<PathBuf>,

        /// Output file for the badge document
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "markdown")]
        format: BadgeFormat,

        /// Input is a Google Benchmark JSON export
        #[arg(long = "google-benchmark")]
        google_benchmark: bool,
    },
}
