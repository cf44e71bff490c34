//! SEOlyzer: on-page SEO signal extraction
//!
//! This crate fetches web pages and extracts meta tags, headers, images,
//! links, timing, mobile-friendliness markers and technical SEO markers
//! into a CSV report.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod pagespeed;
pub mod runner;
pub mod url;
pub mod validation;

use thiserror::Error;

/// Main error type for SEOlyzer operations
#[derive(Debug, Error)]
pub enum SeolyzerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("'{input}' is neither an existing file nor a valid URL")]
    InvalidInput { input: String },

    #[error("No valid URLs found")]
    NoValidUrls,

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Input validation errors
///
/// The `Display` text of each variant is the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("Invalid URL structure: {0}")]
    InvalidUrlStructure(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Depth must be at least 1 (got {0})")]
    DepthTooSmall(i64),

    #[error("Depth must be at most 10 (got {0})")]
    DepthTooLarge(i64),

    #[error("Output path must not be empty")]
    EmptyOutputPath,

    #[error("Output file must have the extension {expected} (got '{path}')")]
    OutputExtension { path: String, expected: &'static str },

    #[error("Invalid characters in output path '{0}'")]
    OutputCharacters(String),
}

/// Result type alias for SEOlyzer operations
pub type Result<T> = std::result::Result<T, SeolyzerError>;

// Re-export commonly used types
pub use analyzer::{Analyzer, PageAnalysis, PageOutcome, PageReport};
pub use config::Config;
pub use runner::{run, RunOptions, RunSummary};
