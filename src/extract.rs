//! Article extraction.
//!
//! Applies the configured CSS selectors to a parsed document. Every field
//! is total: a selector that matches nothing (or does not parse) produces
//! a placeholder, never an error. Organization recognition runs over the
//! extracted content text.

use chrono::{DateTime, Utc};
use dom_query::{Document, Selection};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::entities;
use crate::options::SelectorConfig;
use crate::result::Extraction;

/// Placeholder used when the content selector matches no element.
pub const CONTENT_PLACEHOLDER: &str = "Content not available";

/// Extract content, metadata, and organization mentions from an HTML
/// document.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `config` - Selectors for the content and each metadata field
///
/// # Example
///
/// ```rust
/// use newsclip::{extract, SelectorConfig};
///
/// let html = r#"<html><body>
///   <article>Acme Corp announced a deal with Globex Inc today.</article>
/// </body></html>"#;
///
/// let extraction = extract(html, &SelectorConfig::default());
/// assert!(extraction.content.contains("Acme Corp"));
/// assert_eq!(extraction.organizations.len(), 2);
/// ```
#[must_use]
pub fn extract(html: &str, config: &SelectorConfig) -> Extraction {
    let doc = Document::from(html);

    let content = select_first_text(&doc, &config.content_selector)
        .unwrap_or_else(|| CONTENT_PLACEHOLDER.to_string());

    let mut metadata = HashMap::new();
    for (field, selector) in &config.metadata {
        let value = match select_first_text(&doc, selector) {
            Some(text) => text.trim().to_string(),
            None => format!("{field} not available"),
        };
        metadata.insert(field.clone(), value);
    }

    let organizations: HashSet<String> = entities::organization_mentions(&content)
        .into_iter()
        .collect();

    let published = metadata
        .get("publication_timestamp")
        .and_then(|raw| parse_timestamp(raw));

    debug!(
        content_len = content.len(),
        metadata_fields = metadata.len(),
        organizations = organizations.len(),
        "extraction complete"
    );

    Extraction {
        content,
        metadata,
        organizations,
        published,
    }
}

/// Full text of the first element matching `selector`.
///
/// Returns `None` when nothing matches. An unparseable selector is treated
/// the same way: config typos degrade to the placeholder path instead of
/// failing the run.
fn select_first_text(doc: &Document, selector: &str) -> Option<String> {
    let matches = doc.try_select(selector)?;
    matches
        .nodes()
        .first()
        .map(|node| Selection::from(*node).text().to_string())
}

/// Parse a publication timestamp string into a UTC instant.
///
/// Supports RFC 3339, ISO 8601 without timezone, and common byline date
/// formats. Byline decorations after an em dash or pipe ("Jan 1, 2024 —
/// 10:00 AM EST") are dropped before a retry.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Some(parsed) = parse_date_value(raw) {
        return Some(parsed);
    }

    // Retry on the part before byline decoration
    let prefix = raw.split(['—', '|']).next()?.trim();
    if prefix != raw {
        return parse_date_value(prefix);
    }

    None
}

fn parse_date_value(s: &str) -> Option<DateTime<Utc>> {
    // ISO 8601 with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // ISO 8601 without timezone
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    // Common byline variations
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%B %d, %Y", // January 15, 2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config_with(fields: &[(&str, &str)]) -> SelectorConfig {
        SelectorConfig {
            content_selector: "div.body__content".to_string(),
            metadata: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn content_from_first_match() {
        let html = r#"<html><body>
            <div class="body__content">First body.</div>
            <div class="body__content">Second body.</div>
        </body></html>"#;

        let extraction = extract(html, &config_with(&[]));
        assert_eq!(extraction.content, "First body.");
    }

    #[test]
    fn missing_content_selector_gives_placeholder() {
        let html = "<html><body><p>No article div here.</p></body></html>";
        let extraction = extract(html, &config_with(&[]));
        assert_eq!(extraction.content, CONTENT_PLACEHOLDER);
    }

    #[test]
    fn unparseable_selector_degrades_to_placeholder() {
        let html = "<html><body><div>text</div></body></html>";
        let config = SelectorConfig {
            content_selector: "div..broken[".to_string(),
            metadata: HashMap::new(),
        };

        let extraction = extract(html, &config);
        assert_eq!(extraction.content, CONTENT_PLACEHOLDER);
    }

    #[test]
    fn metadata_text_is_trimmed() {
        let html = r#"<html><body>
            <div class="body__content">Body.</div>
            <span class="byline">  Jane Doe  </span>
        </body></html>"#;

        let extraction = extract(html, &config_with(&[("author", "span.byline")]));
        assert_eq!(extraction.metadata["author"], "Jane Doe");
    }

    #[test]
    fn missing_metadata_field_gets_named_placeholder() {
        let html = r#"<html><body><div class="body__content">Body.</div></body></html>"#;

        let extraction = extract(
            html,
            &config_with(&[("author", "span.byline"), ("topics", "ul.tags")]),
        );
        assert_eq!(extraction.metadata["author"], "author not available");
        assert_eq!(extraction.metadata["topics"], "topics not available");
    }

    #[test]
    fn only_the_missing_field_is_substituted() {
        let html = r#"<html><body>
            <div class="body__content">Body.</div>
            <span class="byline">Jane Doe</span>
        </body></html>"#;

        let extraction = extract(
            html,
            &config_with(&[("author", "span.byline"), ("topics", "ul.tags")]),
        );
        assert_eq!(extraction.metadata["author"], "Jane Doe");
        assert_eq!(extraction.metadata["topics"], "topics not available");
    }

    #[test]
    fn organizations_are_deduplicated() {
        let html = r#"<html><body><div class="body__content">
            Acme Corp rose while Acme Corp also announced buybacks. Acme Corp again.
        </div></body></html>"#;

        let extraction = extract(html, &config_with(&[]));
        assert_eq!(extraction.organizations.len(), 1);
        assert!(extraction.organizations.contains("Acme Corp"));
    }

    #[test]
    fn placeholder_content_yields_no_organizations() {
        let html = "<html><body><p>nothing</p></body></html>";
        let extraction = extract(html, &config_with(&[]));
        assert!(extraction.organizations.is_empty());
    }

    #[test]
    fn published_parsed_from_timestamp_field() {
        let html = r#"<html><body>
            <div class="body__content">Body.</div>
            <p class="stamp">Jan 1, 2024</p>
        </body></html>"#;

        let extraction = extract(
            html,
            &config_with(&[("publication_timestamp", "p.stamp")]),
        );
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(extraction.published, Some(expected));
    }

    #[test]
    fn published_none_without_timestamp_field() {
        let html = r#"<html><body><div class="body__content">Body.</div></body></html>"#;
        let extraction = extract(html, &config_with(&[]));
        assert!(extraction.published.is_none());
    }

    #[test]
    fn parse_timestamp_rfc3339() {
        let parsed = parse_timestamp("2024-01-01T12:30:00Z");
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn parse_timestamp_byline_decoration() {
        let parsed = parse_timestamp("January 1, 2024 — 10:00 AM EST");
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn parse_timestamp_rejects_prose() {
        assert!(parse_timestamp("publication_timestamp not available").is_none());
    }
}
