use crate::config::types::{Config, HttpConfig, PageSpeedConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_pagespeed_config(&config.pagespeed)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates PageSpeed Insights configuration
fn validate_pagespeed_config(config: &PageSpeedConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid pagespeed endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "pagespeed endpoint must use http or https, got '{}'",
            endpoint.scheme()
        )));
    }

    if !matches!(config.strategy.as_str(), "desktop" | "mobile") {
        return Err(ConfigError::Validation(format!(
            "pagespeed strategy must be 'desktop' or 'mobile', got '{}'",
            config.strategy
        )));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "pagespeed timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
