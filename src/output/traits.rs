//! Reporter trait and output errors
//!
//! The runner never prints directly; it notifies a [`Reporter`], so runs can
//! be driven and observed in tests without capturing stdout.

use crate::analyzer::PageReport;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives progress notifications from a run
///
/// Implementations are presentational only: nothing they do affects the
/// run's control flow.
pub trait Reporter {
    /// Called once with the URLs about to be analyzed, in order
    fn analyzing(&self, urls: &[String]);

    /// Called before a URL is fetched
    fn page_started(&self, url: &str);

    /// Called with the finished report for a URL
    fn page_finished(&self, report: &PageReport);

    /// Called for non-fatal problems, such as an input URL failing validation
    fn warning(&self, message: &str);

    /// Called after the CSV report has been written
    fn report_saved(&self, path: &Path);
}

/// A reporter that discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn analyzing(&self, _urls: &[String]) {}
    fn page_started(&self, _url: &str) {}
    fn page_finished(&self, _report: &PageReport) {}
    fn warning(&self, _message: &str) {}
    fn report_saved(&self, _path: &Path) {}
}
