//! URL validation for article fetching.
//!
//! The fetcher only accepts absolute http(s) URLs with a host; anything
//! else is rejected before a request is built.

use url::Url;

use crate::error::{Error, Result};

/// Parse and validate an article URL.
///
/// Accepts absolute `http`/`https` URLs with a host component. Leading and
/// trailing whitespace is tolerated.
///
/// # Example
///
/// ```rust
/// use newsclip::url_utils::parse_article_url;
///
/// let url = parse_article_url("https://example.com/articles/1")?;
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(parse_article_url("ftp://example.com/x").is_err());
/// assert!(parse_article_url("/articles/1").is_err());
/// # Ok::<(), newsclip::Error>(())
/// ```
pub fn parse_article_url(s: &str) -> Result<Url> {
    let s = s.trim();

    if s.is_empty() {
        return Err(Error::InvalidUrl("empty URL".to_string()));
    }

    let url = Url::parse(s).map_err(|e| Error::InvalidUrl(format!("{s}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl(format!(
            "{s}: unsupported scheme {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("{s}: missing host")));
    }

    Ok(url)
}

/// Extract the hostname from an article URL string, for log fields.
///
/// Returns an empty string when the URL does not validate.
#[must_use]
pub fn hostname(s: &str) -> String {
    parse_article_url(s)
        .ok()
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}
