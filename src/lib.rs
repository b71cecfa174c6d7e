//! # newsclip
//!
//! Single-pass article harvester: fetch one web article, extract its main
//! text and configured metadata fields via CSS selectors, recognize
//! organization mentions in the text, and write a plain-text report.
//!
//! The pipeline is strictly linear and synchronous: one blocking GET
//! (fixed 10 s timeout, browser-like user agent, no retry), one selector
//! pass over the parsed document, one report file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use newsclip::{harvest_article, write_report, SelectorConfig};
//! use std::collections::HashMap;
//!
//! let config = SelectorConfig {
//!     content_selector: "div.article-body".to_string(),
//!     metadata: HashMap::from([
//!         ("author".to_string(), "span.byline".to_string()),
//!     ]),
//! };
//!
//! let extraction = harvest_article("https://example.com/articles/1", &config)?;
//! println!("{}", extraction.content);
//! write_report(&extraction, "extracted_data.txt")?;
//! # Ok::<(), newsclip::Error>(())
//! ```
//!
//! Extraction itself never fails: selectors that match nothing (or do not
//! parse) produce placeholder strings. All fallible paths are the fetch
//! boundary and the report write, both surfaced through [`Error`].

mod error;
mod extract;
mod options;
mod result;

/// Organization mention recognition over plain text.
pub mod entities;

/// Response-body charset detection and UTF-8 decoding.
pub mod encoding;

/// Blocking HTTP fetching with failure classification.
pub mod fetch;

/// Fixed-layout plain-text report writing.
pub mod report;

/// Article URL validation.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract, parse_timestamp, CONTENT_PLACEHOLDER};
pub use fetch::Fetcher;
pub use options::SelectorConfig;
pub use report::write_report;
pub use result::Extraction;

/// Fetch an article and extract content, metadata, and organization
/// mentions in one call.
///
/// Equivalent to [`Fetcher::new`] + [`Fetcher::fetch`] + [`extract`].
/// Transport failures are classified into [`Error`]; extraction itself is
/// total.
///
/// # Example
///
/// ```no_run
/// use newsclip::{harvest_article, SelectorConfig};
///
/// let extraction = harvest_article(
///     "https://example.com/articles/1",
///     &SelectorConfig::default(),
/// )?;
/// println!("{} organizations", extraction.organizations.len());
/// # Ok::<(), newsclip::Error>(())
/// ```
pub fn harvest_article(url: &str, config: &SelectorConfig) -> Result<Extraction> {
    let fetcher = Fetcher::new()?;
    let html = fetcher.fetch(url)?;
    Ok(extract::extract(&html, config))
}
