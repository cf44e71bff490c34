//! SEOlyzer main entry point
//!
//! This is the command-line interface for the SEOlyzer page analyzer.

use anyhow::Context;
use clap::Parser;
use seolyzer::output::ConsoleReporter;
use seolyzer::runner::{run, OutputFormat, RunOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SEOlyzer: SEO analysis tool for websites
///
/// Fetches each page and reports meta tags, headers, images, links, load
/// time, mobile-friendliness and technical SEO markers as CSV.
#[derive(Parser, Debug)]
#[command(name = "seolyzer")]
#[command(version = "1.0.0")]
#[command(about = "SEO analysis tool for websites", long_about = None)]
struct Cli {
    /// Either a single URL or a file with URLs (one per line)
    #[arg(value_name = "INPUT_PATH")]
    input_path: String,

    /// Output file for the report (CSV)
    #[arg(short, long, value_name = "FILE")]
    output: String,

    /// Report format (only CSV is supported)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Depth of page analysis (1-10)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    depth: i64,

    /// Additionally run Google PageSpeed Insights analysis (API key required)
    #[arg(long)]
    pagespeed: bool,

    /// PageSpeed Insights API key
    #[arg(long, env = "GOOGLE_PAGESPEED_API_KEY", hide_env_values = true)]
    pagespeed_api_key: Option<String>,

    /// Print a result table for every analyzed page
    #[arg(short, long)]
    verbose: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Suppress log output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.quiet);

    let options = RunOptions {
        input: cli.input_path,
        output: cli.output,
        format: cli.format,
        depth: cli.depth,
        pagespeed: cli.pagespeed,
        pagespeed_api_key: cli.pagespeed_api_key,
        config_path: cli.config,
    };

    let reporter = ConsoleReporter::new(cli.verbose);
    let summary = run(&options, &reporter)
        .await
        .context("SEO analysis failed")?;

    tracing::debug!(
        "Wrote {} rows to {}",
        summary.reports.len(),
        summary.output.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` takes precedence over the built-in filters.
fn setup_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seolyzer=info,warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
