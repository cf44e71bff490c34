//! URL handling module for SEOlyzer
//!
//! This module provides the network-location extraction used to classify
//! links, and the scheme prefix test used when reading URL lists.

mod netloc;

pub use netloc::{network_location, url_network_location};

/// Returns true if the text starts with `http://` or `https://`
///
/// Surrounding whitespace is ignored. This is the cheap filter applied to
/// input lines; full validation lives in [`crate::validation::validate_url`].
///
/// # Examples
///
/// ```
/// use seolyzer::url::is_http_url;
///
/// assert!(is_http_url("https://example.com"));
/// assert!(is_http_url("  http://example.com/page  "));
/// assert!(!is_http_url("example.com"));
/// assert!(!is_http_url("ftp://example.com"));
/// ```
pub fn is_http_url(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("http://") || text.starts_with("https://")
}
