//! Result types for harvest output.
//!
//! This module defines the structured output of one harvest run: the
//! extracted content, the configured metadata fields, and the organization
//! mentions found in the text.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Result of extracting one article.
///
/// Lives only for the duration of a run; the driver prints it once and
/// writes it once.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Extracted article text, or the literal `"Content not available"`
    /// placeholder when the content selector matched nothing.
    pub content: String,

    /// One entry per configured metadata field: the trimmed text of the
    /// first matching element, or `"<field> not available"` on no match.
    pub metadata: HashMap<String, String>,

    /// Organization mentions collected from the content text.
    /// Deduplicated by exact text, unordered.
    pub organizations: HashSet<String>,

    /// Normalized form of the `publication_timestamp` field, when that
    /// field is present and parses as a known date format.
    pub published: Option<DateTime<Utc>>,
}
