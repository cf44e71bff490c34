//! Output module for reports and progress
//!
//! This module handles:
//! - Writing the CSV report
//! - Printing progress and per-page tables to the console
//! - The [`Reporter`] interface the runner reports through

pub mod console;
mod csv_report;
mod traits;

pub use console::{render_table, ConsoleReporter};
pub use csv_report::{render_csv, report_row, write_csv, CSV_HEADERS, PAGESPEED_HEADERS};
pub use traits::{OutputError, OutputResult, Reporter, SilentReporter};
