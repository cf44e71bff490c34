//! Configuration module for SEOlyzer
//!
//! This module handles loading, parsing, and validating the TOML settings
//! file. The file must exist: a missing configuration aborts the run before
//! any network activity.
//!
//! # Example
//!
//! ```no_run
//! use seolyzer::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Requests time out after {}s", config.http.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{Config, HttpConfig, PageSpeedConfig, DEFAULT_PAGESPEED_ENDPOINT};

pub use parser::{load_config, parse_config};
