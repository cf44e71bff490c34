//! Run orchestration
//!
//! This module ties one run together:
//! - Validating the depth and report path
//! - Loading configuration (fatal when missing, before any request)
//! - Resolving and validating the input URLs
//! - Analyzing each URL in input order over one shared session
//! - Writing the CSV report
//!
//! URLs are processed strictly one after another. A failure on one URL
//! never stops the others.

mod input;

pub use input::{filter_valid_urls, resolve_input};

use crate::analyzer::{Analyzer, PageReport};
use crate::config::{load_config, Config};
use crate::output::{write_csv, Reporter};
use crate::pagespeed::PageSpeedClient;
use crate::validation::{validate_depth, validate_output_path};
use crate::SeolyzerError;
use std::path::PathBuf;

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
}

/// Everything a run needs from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// A URL list file or a single URL
    pub input: String,
    /// Report path
    pub output: String,
    pub format: OutputFormat,
    /// Accepted and validated; pages are never followed
    pub depth: i64,
    /// Whether to request PageSpeed Insights scores
    pub pagespeed: bool,
    pub pagespeed_api_key: Option<String>,
    pub config_path: PathBuf,
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<PageReport>,
    pub output: PathBuf,
}

impl RunSummary {
    /// Number of URLs whose initial fetch failed
    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.outcome.error().is_some())
            .count()
    }
}

/// Runs a complete analysis
///
/// # Errors
///
/// Fails before writing anything when the depth or report path is invalid,
/// the configuration cannot be loaded, the input is neither a file nor a URL,
/// or no input URL survives validation.
pub async fn run(options: &RunOptions, reporter: &dyn Reporter) -> Result<RunSummary, SeolyzerError> {
    validate_depth(options.depth)?;
    validate_output_path(&options.output)?;

    if options.depth > 1 {
        tracing::info!(
            "Depth {} requested; each URL is analyzed on its own and links are not followed",
            options.depth
        );
    }

    tracing::info!(
        "Loading configuration from: {}",
        options.config_path.display()
    );
    let config = load_config(&options.config_path)?;

    let candidates = resolve_input(&options.input)?;
    let urls = filter_valid_urls(candidates, reporter);
    if urls.is_empty() {
        return Err(SeolyzerError::NoValidUrls);
    }

    analyze_and_report(&config, &urls, options, reporter).await
}

/// Analyzes already validated URLs and writes the report
///
/// This is the second half of [`run`]: one session is opened for all URLs
/// and released before the report is written.
///
/// # Errors
///
/// Fails when an HTTP client cannot be built or the report cannot be written.
pub async fn analyze_and_report(
    config: &Config,
    urls: &[String],
    options: &RunOptions,
    reporter: &dyn Reporter,
) -> Result<RunSummary, SeolyzerError> {
    reporter.analyzing(urls);

    let analyzer = Analyzer::new(&config.http)?;
    let pagespeed = if options.pagespeed {
        Some(PageSpeedClient::new(
            &config.pagespeed,
            options.pagespeed_api_key.clone(),
        )?)
    } else {
        None
    };

    let reports = analyze_urls(&analyzer, pagespeed.as_ref(), urls, reporter).await;
    analyzer.close();

    let output = PathBuf::from(&options.output);
    match options.format {
        OutputFormat::Csv => write_csv(&output, &reports, options.pagespeed)?,
    }
    reporter.report_saved(&output);

    let summary = RunSummary { reports, output };
    tracing::info!(
        "Analyzed {} URLs ({} failed)",
        summary.reports.len(),
        summary.failed_count()
    );

    Ok(summary)
}

/// Analyzes URLs in order, one at a time
///
/// Each report is stamped with its URL and the time it finished, gets
/// PageSpeed scores attached when a client is given, and is handed to the
/// reporter before the next URL starts.
pub async fn analyze_urls(
    analyzer: &Analyzer,
    pagespeed: Option<&PageSpeedClient>,
    urls: &[String],
    reporter: &dyn Reporter,
) -> Vec<PageReport> {
    let mut reports = Vec::with_capacity(urls.len());

    for url in urls {
        reporter.page_started(url);
        tracing::info!("Analyzing {}", url);

        let outcome = analyzer.analyze_url(url).await;
        let mut report = PageReport::new(url.as_str(), outcome);

        if let Some(client) = pagespeed {
            report = report.with_pagespeed(client.analyze(url).await);
        }

        reporter.page_finished(&report);
        reports.push(report);
    }

    reports
}
