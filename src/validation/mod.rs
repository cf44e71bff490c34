//! Input validators
//!
//! Standalone checks for the three user-supplied values of a run: page URLs,
//! the analysis depth and the report path. The CLI calls them before any
//! network activity, but they carry no state and can be used on their own.

use crate::url::url_network_location;
use crate::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Extension every report path must carry
pub const REPORT_EXTENSION: &str = ".csv";

/// Smallest accepted depth
pub const MIN_DEPTH: i64 = 1;

/// Largest accepted depth
pub const MAX_DEPTH: i64 = 10;

// Alphanumeric/hyphen first label, then one or more alphabetic labels of 2+ chars
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z]{2,})+$")
        .expect("domain pattern is valid")
});

static OUTPUT_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\-./]+$").expect("output path pattern is valid"));

/// Validates a page URL
///
/// A URL without an `http://`/`https://` prefix is checked as if `http://`
/// had been prepended. The network location must be a plain domain name.
///
/// # Examples
///
/// ```
/// use seolyzer::validation::validate_url;
///
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("example.com").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("http://").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let candidate = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| ValidationError::InvalidUrlStructure(format!("'{}': {}", url, e)))?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidUrlStructure(format!(
            "'{}' has no host",
            url
        )));
    }

    let netloc = url_network_location(&parsed);
    if !DOMAIN_PATTERN.is_match(&netloc) {
        return Err(ValidationError::InvalidDomain(netloc));
    }

    Ok(())
}

/// Validates the analysis depth (1 to 10 inclusive)
pub fn validate_depth(depth: i64) -> Result<(), ValidationError> {
    if depth < MIN_DEPTH {
        return Err(ValidationError::DepthTooSmall(depth));
    }

    if depth > MAX_DEPTH {
        return Err(ValidationError::DepthTooLarge(depth));
    }

    Ok(())
}

/// Validates a report output path
///
/// The path must be non-empty, end in `.csv` and use only ASCII letters,
/// digits, `_`, `-`, `.` and `/`.
pub fn validate_output_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyOutputPath);
    }

    if !path.ends_with(REPORT_EXTENSION) {
        return Err(ValidationError::OutputExtension {
            path: path.to_string(),
            expected: REPORT_EXTENSION,
        });
    }

    if !OUTPUT_PATH_PATTERN.is_match(path) {
        return Err(ValidationError::OutputCharacters(path.to_string()));
    }

    Ok(())
}
