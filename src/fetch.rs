//! Article fetching.
//!
//! One blocking GET per harvest, bounded by a fixed timeout, with a
//! browser-like user agent. Transport failures are classified into the
//! crate error taxonomy at this boundary and never travel further as
//! `reqwest` errors. No retry, no backoff.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{error, info};

use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils;

/// Fixed request timeout.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like user agent sent with every request.
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0";

/// Blocking HTTP fetcher for article pages.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher with the fixed timeout and user agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(FETCH_USER_AGENT)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch an article page and return its body decoded to UTF-8.
    ///
    /// The URL must be an absolute http(s) URL with a host. Exactly one
    /// GET is issued; any failure comes back as a classified [`Error`]
    /// after an error-level log event.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let url = url_utils::parse_article_url(url)
            .inspect_err(|err| error!(error = %err, "fetch failed"))?;

        info!(
            host = url.host_str().unwrap_or("-"),
            path = url.path(),
            "fetching starts"
        );

        let response = self.client.get(url).send().map_err(classify)?;
        let response = response.error_for_status().map_err(classify)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(std::string::ToString::to_string);
        let body = response.bytes().map_err(classify)?;

        Ok(encoding::decode_body(&body, content_type.as_deref()))
    }
}

/// Map a transport failure onto the crate error taxonomy, logging it.
fn classify(err: reqwest::Error) -> Error {
    let classified = if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else if err.is_connect() {
        Error::Connect(err.to_string())
    } else if let Some(status) = err.status() {
        Error::Status { status }
    } else {
        Error::Network(err.to_string())
    };

    error!(error = %classified, "fetch failed");
    classified
}
