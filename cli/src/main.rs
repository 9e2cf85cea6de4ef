//! CLI for Release Brancher.
//!
//! Cuts a release branch in every listed repository whose development branch
//! has moved past the latest release tag, and opens a pull request into the
//! stable branch.

use clap::Parser;
use release_brancher::{ReleaseConfig, RunSummary, Runner, RunnerError, Settings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Release Brancher - Cut release branches and open merge PRs across repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated list of `owner/repo` entries.
    #[arg(long, env = "REPOSITORIES_INPUT")]
    repositories: Option<String>,

    /// Release number, used in the branch name (e.g. `release/5.0`).
    #[arg(long, env = "RELEASE_NUMBER")]
    release_number: Option<String>,

    /// GitHub token.
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// File the report is appended to.
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    step_summary: Option<PathBuf>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = release_brancher::DEFAULT_API_BASE)]
    api_url: String,

    /// Path to an optional settings TOML file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Only perform read calls; report the branches that would be created.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Another provider may already be installed; either way one is available.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let (runner, step_summary) = match build_runner(args) {
        Ok(built) => built,
        Err(e) => {
            error!(error = %e, "Critical failure");
            return ExitCode::from(2);
        }
    };

    let summary = runner.run().await;
    report(&summary, step_summary.as_deref());

    if summary.has_failures() {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Validates inputs and builds the runner. No network calls happen here.
fn build_runner(args: Args) -> Result<(Runner, Option<PathBuf>), RunnerError> {
    let config = load_config(args)?;
    let step_summary = config.step_summary_path().map(PathBuf::from);
    Ok((Runner::new(config)?, step_summary))
}

/// Turns arguments into a run configuration.
fn load_config(args: Args) -> Result<ReleaseConfig, RunnerError> {
    let config = ReleaseConfig::from_inputs(
        args.repositories.as_deref(),
        args.release_number.as_deref(),
        args.token.as_deref(),
    )?;

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let config = config
        .with_api_base(&args.api_url)?
    .with_settings(settings)
    .with_step_summary_path(args.step_summary)
    .with_dry_run(args.dry_run);

    Ok(config)
}

/// Prints the report and appends it to the step summary file.
fn report(summary: &RunSummary, step_summary: Option<&Path>) {
    let report = summary.render_report();
    if !report.is_empty() {
        println!("\n{report}");
    }

    if let Some(path) = step_summary {
        if let Err(e) = summary.append_to_step_summary(path) {
            warn!(path = %path.display(), error = %e, "Failed to write step summary");
        }
    }

    println!("Summary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repositories processed: {}", summary.repositories_processed);
    if summary.dry_run {
        println!("  Release branches planned: {}", summary.planned.len());
    } else {
        println!("  PRs created: {}", summary.created_pr_links.len());
    }
    println!("  Repositories skipped: {}", summary.skipped);
    println!("  Repositories failed: {}", summary.errors.len());
}
