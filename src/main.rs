//! sysdash - One-Shot System Health Snapshots Binary
//!
//! Samples CPU, memory, disk, network, and top-process metrics once and
//! writes the result as JSON and/or a rendered HTML report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sysdash::{render_html, SnapshotCollector, DEFAULT_SAMPLE_INTERVAL, DEFAULT_TOP_PROCESSES};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "sysdash")]
#[command(about = "System health snapshots (CPU/Mem/Disk/Net + top processes) with JSON/HTML export")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Top N processes to include
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_TOP_PROCESSES as i64)]
    top: i64,

    /// CPU sampling interval in seconds
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SAMPLE_INTERVAL.as_secs_f64())]
    interval: f64,

    /// Write the JSON report to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write the HTML report to this path
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Pretty-print JSON on stdout when no --json is given
    #[arg(long)]
    pretty: bool,

    /// Skip process listing
    #[arg(long)]
    no_procs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    init_logging(&cli)?;

    let (interval, top) = sampling_settings(&cli)?;

    let mut collector = SnapshotCollector::new();
    let snapshot = collector
        .collect(interval, top, !cli.no_procs)
        .context("failed to collect system snapshot")?;

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&snapshot)?;
        write_report(path, &json)
            .with_context(|| format!("failed to write JSON report to {}", path.display()))?;
        info!("Wrote JSON report to {}", path.display());
    }
    if let Some(path) = &cli.html {
        let html = render_html(&snapshot);
        write_report(path, &html)
            .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
        info!("Wrote HTML report to {}", path.display());
    }

    // Default console behavior when no file output was requested.
    if cli.json.is_none() && cli.html.is_none() {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        println!("{}", json);
    }

    Ok(())
}

/// Validate the interval and clamp the process count.
///
/// Negative counts mean "no processes", same as `--top 0`. An interval that
/// is non-positive, non-finite, or beyond what `Duration` can hold is
/// rejected outright.
fn sampling_settings(cli: &Cli) -> anyhow::Result<(Duration, usize)> {
    if !cli.interval.is_finite() || cli.interval <= 0.0 {
        anyhow::bail!("--interval must be a positive number, got {}", cli.interval);
    }
    let interval = Duration::try_from_secs_f64(cli.interval)
        .with_context(|| format!("--interval {} is too large", cli.interval))?;
    Ok((interval, cli.top.max(0) as usize))
}

/// Write a report file, creating parent directories as needed.
fn write_report(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
