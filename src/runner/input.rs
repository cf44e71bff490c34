//! Input resolution
//!
//! Turns the positional `INPUT_PATH` argument into the ordered URL list.

use crate::output::Reporter;
use crate::url::is_http_url;
use crate::validation::validate_url;
use crate::SeolyzerError;
use std::path::Path;

/// Resolves the input argument to candidate URLs
///
/// An existing file is read line by line: blank lines and lines without an
/// `http://`/`https://` prefix are dropped, the rest are trimmed and kept in
/// file order. Otherwise the argument itself must carry the prefix.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Candidate URLs, possibly empty for a file
/// * `Err(SeolyzerError::InvalidInput)` - Neither a file nor a URL
pub fn resolve_input(input: &str) -> Result<Vec<String>, SeolyzerError> {
    let path = Path::new(input);

    if path.is_file() {
        let content = std::fs::read_to_string(path)?;
        let urls: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| {
                let keep = is_http_url(line);
                if !keep {
                    tracing::debug!("Ignoring non-URL line: {}", line);
                }
                keep
            })
            .map(str::to_string)
            .collect();

        tracing::info!("Read {} URLs from {}", urls.len(), path.display());
        return Ok(urls);
    }

    if is_http_url(input) {
        return Ok(vec![input.trim().to_string()]);
    }

    Err(SeolyzerError::InvalidInput {
        input: input.to_string(),
    })
}

/// Drops URLs that fail [`validate_url`], warning about each one
pub fn filter_valid_urls(urls: Vec<String>, reporter: &dyn Reporter) -> Vec<String> {
    urls.into_iter()
        .filter(|url| match validate_url(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", url, e);
                reporter.warning(&format!("Skipping {}: {}", url, e));
                false
            }
        })
        .collect()
}
