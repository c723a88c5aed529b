use anyhow::{Context, Result};
use clap::Parser;
use fqperf::charts::ChartBackend;
use fqperf::cli::{BadgeFormat, Cli, Command, ReportFormat};
use fqperf::loader::{load_report, InputFormat};
use fqperf::regression::{DetectorConfig, RegressionDetector};
use fqperf::{badge, charts, ci_output, markdown_output};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default location where the benchmark harness drops result files
const DEFAULT_RESULTS_DIR: &str = "benchmark_results/results";

/// Default output directory for generated reports
const DEFAULT_REPORTS_DIR: &str = "benchmark_results/reports";

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn input_format(google_benchmark: bool) -> InputFormat {
    if google_benchmark {
        InputFormat::GoogleBenchmark
    } else {
        InputFormat::Native
    }
}

/// Resolve the input path: an explicit argument wins, otherwise fall back to
/// the newest JSON file in the default results directory
fn resolve_input(input: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path);
    }

    let results_dir = Path::new(DEFAULT_RESULTS_DIR);
    if results_dir.exists() {
        let mut candidates: Vec<PathBuf> = fs::read_dir(results_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        // Result files carry sortable timestamped names; newest sorts last
        candidates.sort();
        if let Some(newest) = candidates.pop() {
            tracing::debug!("using newest result file {}", newest.display());
            return Ok(newest);
        }
    }

    anyhow::bail!("No benchmark results found");
}

fn run_detect(
    baseline: &Path,
    current: &Path,
    warning_threshold: f64,
    critical_threshold: f64,
    ci: bool,
    verbose: bool,
    format: InputFormat,
) -> Result<()> {
    let config = DetectorConfig::with_thresholds(warning_threshold, critical_threshold);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid thresholds: {e}"))?;

    let baseline_report = load_report(baseline, format)?;
    let current_report = load_report(current, format)?;

    let detector = RegressionDetector::new(config);
    let report = detector.compare_reports(&baseline_report, &current_report);

    if ci {
        println!("{}", ci_output::format_ci_output(&report));
    } else {
        println!("{}", markdown_output::format_report(&report, verbose));
    }

    // Warnings alone do not fail the build
    if report.has_critical() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_report(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: ReportFormat,
    input_format: InputFormat,
    update_readme: Option<PathBuf>,
    render_charts: bool,
) -> Result<()> {
    let input_path = resolve_input(input)?;
    let report = load_report(&input_path, input_format)?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR));

    match format {
        ReportFormat::Markdown => {
            let content = markdown_output::generate_markdown_report(&report);
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create {}", output_dir.display()))?;
            let report_path = output_dir.join("latest.md");
            fs::write(&report_path, content)
                .with_context(|| format!("Failed to write {}", report_path.display()))?;
            println!("Generated report: {}", report_path.display());
        }
        ReportFormat::Summary => {
            println!("{}", markdown_output::generate_summary_table(&report));
        }
        ReportFormat::Readme => {
            println!("{}", markdown_output::generate_readme_section(&report));
        }
    }

    if render_charts {
        let backend = charts::default_backend();
        match backend.render_comparison(&report) {
            Some(chart_path) => println!("Generated chart: {}", chart_path.display()),
            None => tracing::warn!("chart rendering unavailable, skipped"),
        }
    }

    if let Some(readme_path) = update_readme {
        markdown_output::update_readme(&readme_path, &report)?;
        println!("Updated README: {}", readme_path.display());
    }

    Ok(())
}

fn run_badge(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: BadgeFormat,
    input_format: InputFormat,
) -> Result<()> {
    let input_path = resolve_input(input)?;
    let report = load_report(&input_path, input_format)?;

    let avg_throughput = badge::average_throughput(&report);

    match format {
        BadgeFormat::Url => {
            let message = format!("{avg_throughput:.0} MB/s");
            println!("{}", badge::badge_url("performance", &message, "blue"));
        }
        BadgeFormat::Markdown => {
            println!("{}", badge::performance_badge_markdown(avg_throughput));
        }
        BadgeFormat::Json => {
            let endpoint = badge::performance_badge_endpoint(avg_throughput);
            let json = serde_json::to_string_pretty(&endpoint)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Badge JSON saved to: {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    match args.command {
        Command::Detect {
            baseline,
            current,
            warning_threshold,
            critical_threshold,
            ci,
            verbose,
            google_benchmark,
        } => run_detect(
            &baseline,
            &current,
            warning_threshold,
            critical_threshold,
            ci,
            verbose,
            input_format(google_benchmark),
        ),
        Command::Report {
            input,
            output,
            format,
            google_benchmark,
            update_readme,
            charts,
        } => run_report(
            input,
            output,
            format,
            input_format(google_benchmark),
            update_readme,
            charts,
        ),
        Command::Badge {
            input,
            output,
            format,
            google_benchmark,
        } => run_badge(input, output, format, input_format(google_benchmark)),
    }
}
