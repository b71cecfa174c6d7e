//! Selector configuration for article extraction.
//!
//! The `SelectorConfig` struct tells the extractor where to find the
//! article body and each metadata field inside the fetched document.

use std::collections::HashMap;

/// Selector configuration for article extraction.
///
/// All fields are public for easy configuration. The config is treated as
/// immutable by the pipeline: it is borrowed, never modified.
///
/// # Example
///
/// ```rust
/// use newsclip::SelectorConfig;
/// use std::collections::HashMap;
///
/// let config = SelectorConfig {
///     content_selector: "div.article-body".to_string(),
///     metadata: HashMap::from([
///         ("author".to_string(), "span.byline".to_string()),
///     ]),
/// };
/// assert_eq!(config.metadata.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// CSS selector for the main article content. The first matching
    /// element wins.
    ///
    /// Default: `"article"`
    pub content_selector: String,

    /// Metadata field name mapped to the CSS selector that locates it.
    /// Each field takes the trimmed text of its first matching element.
    ///
    /// Default: empty
    pub metadata: HashMap<String, String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            content_selector: "article".to_string(),
            metadata: HashMap::new(),
        }
    }
}
