//! Console reporter
//!
//! Prints run progress and, in verbose mode, a Category / Status / Details
//! table per analyzed page.

use crate::analyzer::{PageAnalysis, PageOutcome, PageReport};
use crate::output::traits::Reporter;
use crate::pagespeed::PageSpeedOutcome;
use colored::Colorize;
use std::path::Path;

const PASS: &str = "✓";
const FAIL: &str = "✗";

/// Number of example URLs shown per row
const EXAMPLE_COUNT: usize = 3;

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub category: String,
    pub status: String,
    pub details: String,
}

impl TableRow {
    fn new(category: &str, status: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            status: status.into(),
            details: details.into(),
        }
    }

    fn cells(&self) -> [&str; 3] {
        [&self.category, &self.status, &self.details]
    }
}

/// Reporter printing to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    /// Creates a reporter; `verbose` enables the per-page table
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn analyzing(&self, urls: &[String]) {
        println!("{}", "Analyzing the following URLs:".yellow());
        for url in urls {
            println!(" - {}", url);
        }
    }

    fn page_started(&self, url: &str) {
        println!("{} - SEO analysis for {}", "SEOlyzer".green().bold(), url);
    }

    fn page_finished(&self, report: &PageReport) {
        if let PageOutcome::Failed { error } = &report.outcome {
            println!("{} {}", "Analysis failed:".red(), error);
        }

        if self.verbose {
            println!("{}", render_table(report, true));
        }
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "Warning:".yellow().bold(), message);
    }

    fn report_saved(&self, path: &Path) {
        println!(
            "\n{}",
            format!("CSV report saved to {}", path.display()).green()
        );
    }
}

/// Builds the table rows for a report
pub fn table_rows(report: &PageReport) -> Vec<TableRow> {
    let mut rows = match &report.outcome {
        PageOutcome::Analyzed(analysis) => analysis_rows(analysis),
        PageOutcome::Failed { error } => vec![TableRow::new("Fetch", FAIL, error.as_str())],
    };

    if let Some(pagespeed) = &report.pagespeed {
        rows.push(pagespeed_row(pagespeed));
    }

    rows
}

fn analysis_rows(analysis: &PageAnalysis) -> Vec<TableRow> {
    let meta = &analysis.meta_tags;
    let headers = &analysis.headers;
    let links = &analysis.links;
    let perf = &analysis.performance;
    let mobile = &analysis.mobile_friendly;
    let tech = &analysis.technical_seo;

    let mut rows = vec![TableRow::new(
        "Meta tags",
        mark(meta.is_present()),
        format!(
            "Title: {}, Desc: {}",
            or_none(meta.title.as_deref()),
            or_none(meta.description.as_deref())
        ),
    )];

    for level in 1..=3 {
        rows.push(TableRow::new(
            &format!("H{} header", level),
            headers.count(level).to_string(),
            format!("{:?}", headers.content(level)),
        ));
    }

    let image_examples: Vec<&str> = analysis
        .images
        .images
        .iter()
        .take(EXAMPLE_COUNT)
        .map(|image| image.src.as_str())
        .collect();
    rows.push(TableRow::new(
        "Images",
        analysis.images.count().to_string(),
        format!("Examples: {:?}", image_examples),
    ));

    rows.push(TableRow::new(
        "Links (internal)",
        links.internal_count().to_string(),
        format!("Examples: {:?}", examples(&links.internal)),
    ));
    rows.push(TableRow::new(
        "Links (external)",
        links.external_count().to_string(),
        format!("Examples: {:?}", examples(&links.external)),
    ));

    let size = perf
        .size_bytes
        .map(|s| s.to_string())
        .unwrap_or_else(|| "None".to_string());
    let mut perf_details = format!("Load time: {}s, Size: {} bytes", perf.load_time_seconds, size);
    if let Some(error) = &perf.error {
        perf_details.push_str(&format!(", Error: {}", error));
    }
    rows.push(TableRow::new("Performance", mark(perf.is_ok()), perf_details));

    rows.push(TableRow::new(
        "Mobile viewport",
        mark(mobile.viewport),
        format!("Viewport tag: {}", mobile.viewport),
    ));
    rows.push(TableRow::new(
        "Mobile meta",
        mark(mobile.mobile_meta),
        format!("Mobile meta: {}", mobile.mobile_meta),
    ));

    rows.push(TableRow::new(
        "Canonical",
        mark(tech.canonical.is_some()),
        or_none(tech.canonical.as_deref()),
    ));
    rows.push(TableRow::new(
        "Noindex",
        mark(tech.noindex),
        format!("noindex: {}", tech.noindex),
    ));
    rows.push(TableRow::new(
        "Hreflang",
        mark(!tech.hreflang.is_empty()),
        format!("{:?}", tech.hreflang),
    ));

    rows
}

fn pagespeed_row(outcome: &PageSpeedOutcome) -> TableRow {
    match outcome {
        PageSpeedOutcome::Scores(scores) => TableRow::new(
            "PageSpeed",
            PASS,
            format!(
                "Score: {}, LCP: {}, CLS: {}, FID: {}",
                or_none(scores.score.as_deref()),
                or_none(scores.lcp.as_deref()),
                or_none(scores.cls.as_deref()),
                or_none(scores.fid.as_deref())
            ),
        ),
        PageSpeedOutcome::Error(error) => TableRow::new("PageSpeed", FAIL, error.as_str()),
    }
}

/// Renders the table for a report
///
/// With `color` off the output is plain text, suitable for logs and tests.
pub fn render_table(report: &PageReport, color: bool) -> String {
    let rows = table_rows(report);
    let header = TableRow::new("Category", "Status", "Details");

    let mut widths = [0usize; 3];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let title = format!(
        "SEO Analysis Results: {} ({})",
        report.url,
        report.timestamp.to_rfc3339()
    );
    let separator = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );

    let mut out = String::new();
    out.push_str(&if color {
        title.bold().to_string()
    } else {
        title
    });
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&header, &widths, false));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths, color));
        out.push('\n');
    }
    out.push_str(&separator);

    out
}

fn format_row(row: &TableRow, widths: &[usize; 3], color: bool) -> String {
    let category = pad(&row.category, widths[0]);
    let status = pad(&row.status, widths[1]);
    let details = pad(&row.details, widths[2]);

    if color {
        format!(
            "| {} | {} | {} |",
            category.cyan(),
            status.green(),
            details.yellow()
        )
    } else {
        format!("| {} | {} | {} |", category, status, details)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn mark(ok: bool) -> &'static str {
    if ok {
        PASS
    } else {
        FAIL
    }
}

fn or_none(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}

fn examples(links: &[String]) -> &[String] {
    &links[..links.len().min(EXAMPLE_COUNT)]
}
