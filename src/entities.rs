//! Organization mention recognition.
//!
//! A pattern/lexicon recognizer over plain article text. Candidate spans
//! are maximal runs of capitalized tokens; a candidate counts as an
//! organization when it carries a corporate designator ("Acme Corp",
//! "Globex Inc", "Procter & Gamble Co"). Spans are reported per
//! occurrence, in document order; deduplication is the caller's concern.
//!
//! Bare acronyms ("IBM") and designator-less names are out of reach of the
//! lexicon and are accepted as misses. The designator table below is the
//! extension point.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal run of capitalized tokens, allowing an `&` connector between
/// tokens. Periods are excluded from tokens so sentence punctuation never
/// leaks into a span ("Globex Inc." yields "Globex Inc").
#[allow(clippy::expect_used)]
static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][A-Za-z0-9&\-]*(?:\s+(?:&\s+)?[A-Z][A-Za-z0-9&\-]*)*")
        .expect("valid regex")
});

/// Corporate designators that mark a capitalized run as an organization.
/// Matched case-insensitively against individual tokens.
const DESIGNATORS: &[&str] = &[
    "Inc",
    "Corp",
    "Corporation",
    "Co",
    "Company",
    "Ltd",
    "LLC",
    "LLP",
    "Plc",
    "Group",
    "Holdings",
    "Partners",
    "Capital",
    "Bank",
    "Trust",
    "Fund",
    "Technologies",
    "Systems",
    "Industries",
    "International",
    "Enterprises",
    "Ventures",
    "Associates",
    "Bancorp",
    "AG",
    "GmbH",
    "SA",
    "NV",
];

/// Sentence-position words that capitalization alone drags into a run.
/// Stripped from the front of a span before it is reported.
const LEADING_STOPWORDS: &[&str] = &[
    "The", "A", "An", "In", "On", "At", "By", "For", "From", "With", "As",
    "And", "But", "Today", "Yesterday", "Tomorrow", "Monday", "Tuesday",
    "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// Number of tokens kept to the left of a designator when carving a span
/// out of a longer capitalized run.
const MAX_NAME_TOKENS: usize = 3;

fn is_designator(token: &str) -> bool {
    DESIGNATORS.iter().any(|d| d.eq_ignore_ascii_case(token))
}

fn is_leading_stopword(token: &str) -> bool {
    LEADING_STOPWORDS.iter().any(|w| w.eq_ignore_ascii_case(token))
}

/// Recognize organization mentions in plain text.
///
/// Returns every mention in document order, duplicates included.
///
/// # Example
///
/// ```rust
/// use newsclip::entities::organization_mentions;
///
/// let text = "Acme Corp announced a deal with Globex Inc today.";
/// let mentions = organization_mentions(text);
/// assert_eq!(mentions, vec!["Acme Corp", "Globex Inc"]);
/// ```
#[must_use]
pub fn organization_mentions(text: &str) -> Vec<String> {
    let mut mentions = Vec::new();

    for run in CAPITALIZED_RUN.find_iter(text) {
        collect_from_run(run.as_str(), &mut mentions);
    }

    mentions
}

/// Carve organization spans out of one capitalized run.
///
/// Each designator token ends a span; the span extends left over up to
/// [`MAX_NAME_TOKENS`] preceding tokens, never reaching into an earlier
/// span, and sheds leading sentence stopwords. A designator with no name
/// tokens in front of it is ignored.
fn collect_from_run(run: &str, out: &mut Vec<String>) {
    let tokens: Vec<&str> = run.split_whitespace().collect();
    let mut consumed = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        if i < consumed || !is_designator(token) {
            continue;
        }

        let mut start = i.saturating_sub(MAX_NAME_TOKENS).max(consumed);
        while start < i && is_leading_stopword(tokens[start]) {
            start += 1;
        }

        // A designator with nothing in front of it is not a name. It stays
        // unconsumed: it may be the head of a longer name ending at a
        // later designator ("International Business Machines Corp").
        if start == i {
            continue;
        }

        out.push(tokens[start..=i].join(" "));
        consumed = i + 1;
    }
}
