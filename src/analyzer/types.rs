//! Typed analysis records
//!
//! Every group is populated independently; an absent value means "not found
//! on the page", never an error.

use crate::pagespeed::PageSpeedOutcome;
use chrono::{DateTime, Local};

/// Number of heading levels tracked (h1 through h6)
pub const HEADING_LEVELS: usize = 6;

/// Title and meta description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaTags {
    /// First `<title>` text, trimmed
    pub title: Option<String>,
    /// First `<meta name="description">` content, trimmed
    pub description: Option<String>,
}

impl MetaTags {
    pub fn is_present(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// Heading census for levels 1 to 6
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    levels: [Vec<String>; HEADING_LEVELS],
}

impl Headers {
    pub fn new(levels: [Vec<String>; HEADING_LEVELS]) -> Self {
        Self { levels }
    }

    /// Heading texts for a level in document order; empty for levels outside 1..=6
    pub fn content(&self, level: usize) -> &[String] {
        match level {
            1..=HEADING_LEVELS => &self.levels[level - 1],
            _ => &[],
        }
    }

    /// Number of headings at a level
    pub fn count(&self, level: usize) -> usize {
        self.content(level).len()
    }

    /// Full per-level map, h1 first
    pub fn levels(&self) -> &[Vec<String>; HEADING_LEVELS] {
        &self.levels
    }
}

/// One `<img>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// `src` attribute, empty when missing
    pub src: String,
    /// `alt` attribute; `None` when the attribute is missing entirely
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Images {
    pub images: Vec<ImageInfo>,
}

impl Images {
    pub fn count(&self) -> usize {
        self.images.len()
    }
}

/// Anchor hrefs partitioned by network location
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl Links {
    pub fn internal_count(&self) -> usize {
        self.internal.len()
    }

    pub fn external_count(&self) -> usize {
        self.external.len()
    }
}

/// Result of the dedicated timed fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Performance {
    /// Response status; `None` when the request failed
    pub status_code: Option<u16>,
    /// Response body length in bytes; `None` when the request failed
    pub size_bytes: Option<usize>,
    /// Wall-clock seconds, rounded to milliseconds; reported even on failure
    pub load_time_seconds: f64,
    pub error: Option<String>,
}

impl Performance {
    pub fn is_ok(&self) -> bool {
        self.status_code == Some(200)
    }
}

/// Mobile-friendliness markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileFriendly {
    /// `<meta name="viewport">` present
    pub viewport: bool,
    /// `<meta name="HandheldFriendly">` or `<meta name="MobileOptimized">` present
    pub mobile_meta: bool,
}

/// Canonical, robots and hreflang markers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicalSeo {
    pub canonical: Option<String>,
    pub noindex: bool,
    pub hreflang: Vec<String>,
}

/// All signal groups extracted for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnalysis {
    pub meta_tags: MetaTags,
    pub headers: Headers,
    pub images: Images,
    pub links: Links,
    pub performance: Performance,
    pub mobile_friendly: MobileFriendly,
    pub technical_seo: TechnicalSeo,
}

/// Outcome of analyzing one URL
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Analyzed(Box<PageAnalysis>),
    /// The initial fetch failed or did not return 200; no groups computed
    Failed { error: String },
}

impl PageOutcome {
    pub fn analysis(&self) -> Option<&PageAnalysis> {
        match self {
            PageOutcome::Analyzed(analysis) => Some(&**analysis),
            PageOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageOutcome::Analyzed(_) => None,
            PageOutcome::Failed { error } => Some(error),
        }
    }
}

/// One row of the final report
#[derive(Debug, Clone)]
pub struct PageReport {
    pub url: String,
    pub timestamp: DateTime<Local>,
    pub outcome: PageOutcome,
    /// `None` unless PageSpeed scoring was requested
    pub pagespeed: Option<PageSpeedOutcome>,
}

impl PageReport {
    /// Stamps an outcome with its URL and the current local time
    pub fn new(url: impl Into<String>, outcome: PageOutcome) -> Self {
        Self {
            url: url.into(),
            timestamp: Local::now(),
            outcome,
            pagespeed: None,
        }
    }

    pub fn with_pagespeed(mut self, pagespeed: PageSpeedOutcome) -> Self {
        self.pagespeed = Some(pagespeed);
        self
    }
}
