use url::{ParseError, Url};

/// Returns the network location (`[user[:pass]@]host[:port]`) of a parsed URL
///
/// Hosts come back lowercased and default ports are dropped, as `url`
/// normalizes both during parsing.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seolyzer::url::url_network_location;
///
/// let url = Url::parse("https://Example.com:8443/path").unwrap();
/// assert_eq!(url_network_location(&url), "example.com:8443");
/// ```
pub fn url_network_location(url: &Url) -> String {
    let mut netloc = String::new();

    if !url.username().is_empty() || url.password().is_some() {
        netloc.push_str(url.username());
        if let Some(password) = url.password() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }

    if let Some(host) = url.host_str() {
        netloc.push_str(host);
    }

    if let Some(port) = url.port() {
        netloc.push(':');
        netloc.push_str(&port.to_string());
    }

    netloc
}

/// Returns the network location of an href as written in a document
///
/// Relative references (`/x`, `page.html`, `#top`) and schemes without an
/// authority (`mailto:`, `javascript:`) have an empty network location.
/// Scheme-relative references (`//cdn.example.com/x`) keep theirs.
///
/// # Examples
///
/// ```
/// use seolyzer::url::network_location;
///
/// assert_eq!(network_location("https://other.com/y"), "other.com");
/// assert_eq!(network_location("/x"), "");
/// assert_eq!(network_location("//cdn.example.com/lib.js"), "cdn.example.com");
/// ```
pub fn network_location(href: &str) -> String {
    let href = href.trim();

    match Url::parse(href) {
        Ok(url) => url_network_location(&url),
        Err(ParseError::RelativeUrlWithoutBase) if href.starts_with("//") => {
            Url::parse(&format!("http:{}", href))
                .map(|url| url_network_location(&url))
                .unwrap_or_default()
        }
        Err(_) => String::new(),
    }
}
