//! CSV report generation
//!
//! One row per analyzed URL with a fixed 14-column schema, extended by four
//! PageSpeed columns when scoring was requested. Missing values are empty
//! cells, except the three counts, which are `0` for pages that could not be
//! fetched.

use crate::analyzer::{PageAnalysis, PageReport};
use crate::output::traits::OutputResult;
use crate::pagespeed::PageSpeedScores;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Base report columns
pub const CSV_HEADERS: [&str; 14] = [
    "URL",
    "Title tag content",
    "Description tag content",
    "H1 header count",
    "H1 header content",
    "H2 header count",
    "H2 header content",
    "Image count",
    "Load time",
    "Size",
    "Viewport tag",
    "Canonical",
    "hreflang",
    "Noindex",
];

/// Columns appended when PageSpeed scoring is enabled
pub const PAGESPEED_HEADERS: [&str; 4] = ["PageSpeed Score", "LCP", "CLS", "FID"];

/// Writes the report to a file, replacing any existing one
///
/// # Arguments
///
/// * `path` - Destination file
/// * `reports` - Reports in input order
/// * `pagespeed` - Whether to include the PageSpeed columns
pub fn write_csv(path: &Path, reports: &[PageReport], pagespeed: bool) -> OutputResult<()> {
    let file = File::create(path)?;
    render_csv(file, reports, pagespeed)
}

/// Writes the report to any writer
pub fn render_csv<W: Write>(writer: W, reports: &[PageReport], pagespeed: bool) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut headers: Vec<&str> = CSV_HEADERS.to_vec();
    if pagespeed {
        headers.extend(PAGESPEED_HEADERS);
    }
    writer.write_record(&headers)?;

    for report in reports {
        writer.write_record(&report_row(report, pagespeed))?;
    }

    writer.flush()?;
    Ok(())
}

/// Builds the cells of one row
pub fn report_row(report: &PageReport, pagespeed: bool) -> Vec<String> {
    let mut row = vec![report.url.clone()];

    match report.outcome.analysis() {
        Some(analysis) => row.extend(analysis_cells(analysis)),
        None => row.extend(failed_cells()),
    }

    if pagespeed {
        let scores = report
            .pagespeed
            .as_ref()
            .and_then(|outcome| outcome.scores())
            .cloned()
            .unwrap_or_default();
        row.extend(pagespeed_cells(scores));
    }

    row
}

fn analysis_cells(analysis: &PageAnalysis) -> [String; 13] {
    let meta = &analysis.meta_tags;
    let headers = &analysis.headers;
    let perf = &analysis.performance;
    let tech = &analysis.technical_seo;

    [
        meta.title.clone().unwrap_or_default(),
        meta.description.clone().unwrap_or_default(),
        headers.count(1).to_string(),
        headers.content(1).join(", "),
        headers.count(2).to_string(),
        headers.content(2).join(", "),
        analysis.images.count().to_string(),
        seconds_cell(perf.load_time_seconds),
        perf.size_bytes.map(|s| s.to_string()).unwrap_or_default(),
        bool_cell(analysis.mobile_friendly.viewport),
        tech.canonical.clone().unwrap_or_default(),
        tech.hreflang.join(","),
        bool_cell(tech.noindex),
    ]
}

fn failed_cells() -> [String; 13] {
    let mut cells: [String; 13] = Default::default();
    // H1 count, H2 count and image count
    for index in [2, 4, 6] {
        cells[index] = "0".to_string();
    }
    cells
}

// Always carries a fractional part, so two seconds reads "2.0"
fn seconds_cell(seconds: f64) -> String {
    format!("{:?}", seconds)
}

fn pagespeed_cells(scores: PageSpeedScores) -> [String; 4] {
    [
        scores.score.unwrap_or_default(),
        scores.lcp.unwrap_or_default(),
        scores.cls.unwrap_or_default(),
        scores.fid.unwrap_or_default(),
    ]
}

fn bool_cell(value: bool) -> String {
    let cell = if value { "True" } else { "False" };
    cell.to_string()
}
