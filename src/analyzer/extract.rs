//! HTML signal extraction
//!
//! Pure functions mapping a parsed document to the analysis groups. None of
//! them touch the network; the performance group is measured separately by
//! the [`Analyzer`](crate::analyzer::Analyzer).

use crate::analyzer::types::{
    Headers, ImageInfo, Images, Links, MetaTags, MobileFriendly, TechnicalSeo, HEADING_LEVELS,
};
use crate::url::network_location;
use scraper::{ElementRef, Html, Selector};

/// Every group that can be derived from the document alone
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPage {
    pub meta_tags: MetaTags,
    pub headers: Headers,
    pub images: Images,
    pub links: Links,
    pub mobile_friendly: MobileFriendly,
    pub technical_seo: TechnicalSeo,
}

/// Extracts all document-derived groups
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use seolyzer::analyzer::extract_page;
///
/// let html = r#"<html><head><title>Home</title></head><body><h1>Welcome</h1></body></html>"#;
/// let page = extract_page(&Html::parse_document(html));
/// assert_eq!(page.meta_tags.title.as_deref(), Some("Home"));
/// assert_eq!(page.headers.count(1), 1);
/// ```
pub fn extract_page(document: &Html) -> ExtractedPage {
    ExtractedPage {
        meta_tags: extract_meta_tags(document),
        headers: extract_headers(document),
        images: extract_images(document),
        links: extract_links(document),
        mobile_friendly: check_mobile_friendly(document),
        technical_seo: extract_technical_seo(document),
    }
}

/// Extracts the title and meta description
pub fn extract_meta_tags(document: &Html) -> MetaTags {
    let title = first_match(document, "title")
        .map(|element| element_text(&element))
        .filter(|s| !s.is_empty());

    let description = first_match(document, "meta[name='description']")
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string());

    MetaTags { title, description }
}

/// Collects the trimmed text of every heading, per level
pub fn extract_headers(document: &Html) -> Headers {
    let levels: [Vec<String>; HEADING_LEVELS] = std::array::from_fn(|i| {
        select_all(document, &format!("h{}", i + 1))
            .iter()
            .map(element_text)
            .collect()
    });

    Headers::new(levels)
}

/// Lists every `<img>` with its `src` and `alt`
pub fn extract_images(document: &Html) -> Images {
    let images = select_all(document, "img")
        .iter()
        .map(|element| ImageInfo {
            src: element.value().attr("src").unwrap_or("").to_string(),
            alt: element.value().attr("alt").map(str::to_string),
        })
        .collect();

    Images { images }
}

/// Infers the page's own network location
///
/// Taken from the first canonical `<link>`, falling back to `<base href>`.
/// Returns an empty string when neither carries an href.
pub fn infer_domain(document: &Html) -> String {
    if let Some(href) =
        first_match(document, "link[rel~='canonical']").and_then(|e| e.value().attr("href"))
    {
        return network_location(href);
    }

    first_match(document, "base")
        .and_then(|element| element.value().attr("href"))
        .map(network_location)
        .unwrap_or_default()
}

/// Partitions anchor hrefs into internal and external links
///
/// A link is internal when its network location is empty (relative links)
/// or equals the inferred page domain. Hrefs are kept as written.
pub fn extract_links(document: &Html) -> Links {
    let domain = infer_domain(document);
    let mut links = Links::default();

    for element in select_all(document, "a[href]") {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let netloc = network_location(href);
        if netloc.is_empty() || netloc == domain {
            links.internal.push(href.to_string());
        } else {
            links.external.push(href.to_string());
        }
    }

    links
}

/// Checks for viewport and mobile-optimization meta tags
pub fn check_mobile_friendly(document: &Html) -> MobileFriendly {
    MobileFriendly {
        viewport: first_match(document, "meta[name='viewport']").is_some(),
        mobile_meta: first_match(
            document,
            "meta[name='HandheldFriendly'], meta[name='MobileOptimized']",
        )
        .is_some(),
    }
}

/// Extracts canonical URL, robots noindex flag and hreflang values
pub fn extract_technical_seo(document: &Html) -> TechnicalSeo {
    let canonical = first_match(document, "link[rel~='canonical']")
        .and_then(|element| element.value().attr("href"))
        .map(str::to_string);

    let noindex = first_match(document, "meta[name='robots']")
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_lowercase().contains("noindex"))
        .unwrap_or(false);

    let hreflang = select_all(document, "link[rel~='alternate'][hreflang]")
        .iter()
        .filter_map(|element| element.value().attr("hreflang"))
        .map(str::to_string)
        .collect();

    TechnicalSeo {
        canonical,
        noindex,
        hreflang,
    }
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
