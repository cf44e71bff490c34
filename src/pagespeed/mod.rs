//! Google PageSpeed Insights client
//!
//! Optional per-page scoring. Every failure (missing API key, transport
//! error, non-2xx status, malformed body) degrades to
//! [`PageSpeedOutcome::Error`]; nothing here aborts a run.

use crate::config::PageSpeedConfig;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Scores extracted from a Lighthouse result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSpeedScores {
    /// Performance category score (0 to 1)
    pub score: Option<String>,
    /// Largest Contentful Paint display value
    pub lcp: Option<String>,
    /// Cumulative Layout Shift display value
    pub cls: Option<String>,
    /// Reported as FID; taken from the "interactive" audit
    pub fid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSpeedOutcome {
    Scores(PageSpeedScores),
    Error(String),
}

impl PageSpeedOutcome {
    pub fn scores(&self) -> Option<&PageSpeedScores> {
        match self {
            PageSpeedOutcome::Scores(scores) => Some(scores),
            PageSpeedOutcome::Error(_) => None,
        }
    }
}

/// Client for the PageSpeed Insights `runPagespeed` endpoint
pub struct PageSpeedClient {
    client: Client,
    endpoint: String,
    strategy: String,
    api_key: Option<String>,
}

impl PageSpeedClient {
    /// Creates a client; `api_key` of `None` makes every lookup an error
    pub fn new(config: &PageSpeedConfig, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            strategy: config.strategy.clone(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    /// Scores one URL
    pub async fn analyze(&self, url: &str) -> PageSpeedOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return PageSpeedOutcome::Error("No API key set".to_string());
        };

        tracing::debug!("Requesting PageSpeed scores for {}", url);

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[
                ("url", url),
                ("key", api_key),
                ("strategy", self.strategy.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("PageSpeed request failed for {}: {}", url, e);
                return PageSpeedOutcome::Error(e.without_url().to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            return PageSpeedOutcome::Error(format!("HTTP {}", status.as_u16()));
        }

        match response.text().await {
            Ok(body) => parse_response(&body),
            Err(e) => PageSpeedOutcome::Error(e.without_url().to_string()),
        }
    }
}

/// Extracts the four scores from a PageSpeed Insights JSON response
///
/// Missing fields become `None`; a body that is not JSON is an error.
pub fn parse_response(body: &str) -> PageSpeedOutcome {
    let data: Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => return PageSpeedOutcome::Error(format!("Malformed response: {}", e)),
    };

    PageSpeedOutcome::Scores(PageSpeedScores {
        score: field(&data, "/lighthouseResult/categories/performance/score"),
        lcp: field(
            &data,
            "/lighthouseResult/audits/largest-contentful-paint/displayValue",
        ),
        cls: field(
            &data,
            "/lighthouseResult/audits/cumulative-layout-shift/displayValue",
        ),
        fid: field(&data, "/lighthouseResult/audits/interactive/displayValue"),
    })
}

fn field(data: &Value, pointer: &str) -> Option<String> {
    match data.pointer(pointer)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
