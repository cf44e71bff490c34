use serde::Deserialize;

/// Default PageSpeed Insights API endpoint
pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Main configuration structure for SEOlyzer
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(default)]
    pub pagespeed: PageSpeedConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every page request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// PageSpeed Insights configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpeedConfig {
    #[serde(default = "default_pagespeed_endpoint")]
    pub endpoint: String,

    /// Lighthouse strategy, "desktop" or "mobile"
    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(rename = "timeout-secs", default = "default_pagespeed_timeout")]
    pub timeout_secs: u64,
}

impl Default for PageSpeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_pagespeed_endpoint(),
            strategy: default_strategy(),
            timeout_secs: default_pagespeed_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pagespeed_endpoint() -> String {
    DEFAULT_PAGESPEED_ENDPOINT.to_string()
}

fn default_strategy() -> String {
    "desktop".to_string()
}

// Lighthouse runs routinely take 20-40 seconds
fn default_pagespeed_timeout() -> u64 {
    60
}
