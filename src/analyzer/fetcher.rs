//! HTTP fetcher implementation
//!
//! This module handles all page requests, including:
//! - Building the shared HTTP client with the configured user agent
//! - Timed GET requests returning status, body and size
//! - Decoding the body with the charset the server declares
//! - Error classification (timeouts vs other transport failures)

use crate::config::HttpConfig;
use crate::SeolyzerError;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// A fetched page with its timing
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: StatusCode,
    /// Body decoded with the declared charset, UTF-8 otherwise
    pub body: String,
    /// Raw body length in bytes
    pub size_bytes: usize,
    /// Time from sending the request to reading the full body
    pub elapsed: Duration,
}

impl FetchedPage {
    /// Canonical reason phrase for the status, e.g. "Not Found"
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    /// Elapsed time in seconds, rounded to milliseconds
    pub fn elapsed_seconds(&self) -> f64 {
        round_seconds(self.elapsed)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP section of the configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use seolyzer::config::HttpConfig;
/// use seolyzer::analyzer::build_http_client;
///
/// let config = HttpConfig {
///     user_agent: "Mozilla/5.0 (compatible; SEOlyzer/1.0)".to_string(),
///     request_timeout_secs: 30,
///     connect_timeout_secs: 10,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET and times it
///
/// Any status code is returned as a page; only transport failures (DNS,
/// connection, TLS, timeout, body read) are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, SeolyzerError> {
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = response
        .bytes()
        .await
        .map_err(|e| classify_error(url, e))?;
    let elapsed = start.elapsed();

    tracing::debug!(
        "GET {} -> {} ({} bytes, {:?})",
        url,
        status.as_u16(),
        bytes.len(),
        elapsed
    );

    Ok(FetchedPage {
        status,
        body: decode_body(&bytes, content_type.as_deref()),
        size_bytes: bytes.len(),
        elapsed,
    })
}

/// Decodes a response body using the `charset` of its `Content-Type`
///
/// Unknown or missing charsets fall back to UTF-8. Malformed sequences are
/// replaced rather than rejected.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

/// Rounds a duration to seconds with millisecond precision
pub fn round_seconds(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}

fn classify_error(url: &str, error: reqwest::Error) -> SeolyzerError {
    if error.is_timeout() {
        SeolyzerError::Timeout {
            url: url.to_string(),
        }
    } else {
        SeolyzerError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
