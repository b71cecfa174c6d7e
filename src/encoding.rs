//! Character encoding detection for fetched response bodies.
//!
//! Servers declare charsets inconsistently: sometimes in the
//! `Content-Type` header, sometimes only in an HTML meta tag, often not at
//! all. Resolution order here is header parameter, then meta declaration,
//! then UTF-8. Decoding is always lossy, never an error.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match the `charset=` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*"?([^";\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Resolve the encoding of a response body.
///
/// Checks, in order:
/// 1. The `charset=` parameter of the `Content-Type` header, if supplied.
/// 2. `<meta charset="...">` in the first 1024 bytes of the body.
/// 3. `<meta http-equiv="Content-Type" ...>` in the same window.
/// 4. Falls back to UTF-8.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(header) = content_type {
        if let Some(charset) = capture_first(&HEADER_CHARSET_RE, header) {
            if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
                return encoding;
            }
        }
    }

    // Only sniff the head of the document for meta declarations
    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(charset) = capture_first(&CHARSET_META_RE, &head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    if let Some(charset) = capture_first(&CONTENT_TYPE_CHARSET_RE, &head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Decode a fetched body to a UTF-8 string.
///
/// `content_type` is the raw `Content-Type` header value, when the server
/// sent one. Invalid sequences are replaced with U+FFFD rather than
/// causing errors.
///
/// # Examples
///
/// ```
/// use newsclip::encoding::decode_body;
///
/// let body = b"<html><body>Hello, World!</body></html>";
/// let html = decode_body(body, Some("text/html; charset=utf-8"));
/// assert!(html.contains("Hello, World!"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        // Fast path: lossy conversion only
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

fn capture_first(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
