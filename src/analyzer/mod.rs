//! Page analysis module
//!
//! This module contains the single-page pipeline:
//! - HTTP fetching with the shared client
//! - Signal extraction from the parsed document
//! - The timed performance fetch
//!
//! Each URL costs two requests: one content GET that every document-derived
//! group is computed from, and one dedicated timed GET for the performance
//! group, so a failure there never hides the other groups.

mod extract;
mod fetcher;
mod types;

pub use extract::{
    check_mobile_friendly, extract_headers, extract_images, extract_links, extract_meta_tags,
    extract_page, extract_technical_seo, infer_domain, ExtractedPage,
};
pub use fetcher::{build_http_client, decode_body, fetch_page, round_seconds, FetchedPage};
pub use types::{
    Headers, ImageInfo, Images, Links, MetaTags, MobileFriendly, PageAnalysis, PageOutcome,
    PageReport, Performance, TechnicalSeo, HEADING_LEVELS,
};

use crate::config::HttpConfig;
use crate::SeolyzerError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Instant;

/// Analyzes pages over one shared HTTP session
///
/// The session is released by [`Analyzer::close`] once the run is over.
pub struct Analyzer {
    client: Client,
}

impl Analyzer {
    /// Creates an analyzer with a client built from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, SeolyzerError> {
        let client = build_http_client(config)?;
        Ok(Self { client })
    }

    /// Analyzes a single URL
    ///
    /// A transport failure or any status other than 200 on the content fetch
    /// yields [`PageOutcome::Failed`]. Otherwise every group is populated;
    /// a failed performance fetch is recorded inside [`Performance`] only.
    pub async fn analyze_url(&self, url: &str) -> PageOutcome {
        let page = match fetch_page(&self.client, url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Fetch failed for {}: {}", url, e);
                return PageOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };

        if page.status != StatusCode::OK {
            tracing::warn!("{} returned HTTP {}", url, page.status.as_u16());
            return PageOutcome::Failed {
                error: format!("HTTP {}: {}", page.status.as_u16(), page.reason()),
            };
        }

        let extracted = {
            let document = Html::parse_document(&page.body);
            extract_page(&document)
        };

        let performance = self.measure_performance(url).await;

        PageOutcome::Analyzed(Box::new(PageAnalysis {
            meta_tags: extracted.meta_tags,
            headers: extracted.headers,
            images: extracted.images,
            links: extracted.links,
            performance,
            mobile_friendly: extracted.mobile_friendly,
            technical_seo: extracted.technical_seo,
        }))
    }

    /// Runs the dedicated timed fetch
    ///
    /// Elapsed time is reported whether or not the request succeeds.
    pub async fn measure_performance(&self, url: &str) -> Performance {
        let start = Instant::now();

        match fetch_page(&self.client, url).await {
            Ok(page) => Performance {
                status_code: Some(page.status.as_u16()),
                size_bytes: Some(page.size_bytes),
                load_time_seconds: page.elapsed_seconds(),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Performance fetch failed for {}: {}", url, e);
                Performance {
                    status_code: None,
                    size_bytes: None,
                    load_time_seconds: round_seconds(start.elapsed()),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Releases the HTTP session
    pub fn close(self) {
        tracing::debug!("Closing HTTP session");
        drop(self.client);
    }
}
