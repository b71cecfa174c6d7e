//! Driver binary: fetches one article, prints the extraction as JSON to
//! stdout, and writes the plain-text report to `extracted_data.txt`.
//!
//! The URL and selectors are fixed here, not taken from flags or files.
//! A report-write failure is logged and printed but does not change the
//! exit status.

use newsclip::{harvest_article, write_report, Extraction, SelectorConfig};
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;
use tracing_subscriber::EnvFilter;

const ARTICLE_URL: &str = "https://www.nasdaq.com/articles/should-investors-buy-the-artificial-intelligence-technology-etf-instead-of-individual-ai";
const REPORT_PATH: &str = "extracted_data.txt";

#[derive(Serialize)]
struct Output<'a> {
    content: &'a str,
    metadata: &'a HashMap<String, String>,
    company_names: Vec<&'a str>,
    published: Option<String>,
}

impl<'a> From<&'a Extraction> for Output<'a> {
    fn from(extraction: &'a Extraction) -> Self {
        let mut company_names: Vec<&str> = extraction
            .organizations
            .iter()
            .map(String::as_str)
            .collect();
        company_names.sort_unstable();

        Self {
            content: &extraction.content,
            metadata: &extraction.metadata,
            company_names,
            published: extraction.published.map(|d| d.to_rfc3339()),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SelectorConfig {
        // CSS selector for the main content
        content_selector: "div.body__content".to_string(),
        metadata: HashMap::from([
            (
                "publication_timestamp".to_string(),
                "p.jupiter22-c-author-byline__timestamp".to_string(),
            ),
            (
                "author".to_string(),
                "span.jupiter22-c-author-byline__author-no-link".to_string(),
            ),
        ]),
    };

    match harvest_article(ARTICLE_URL, &config) {
        Ok(extraction) => {
            println!(
                "{}",
                serde_json::to_string(&Output::from(&extraction)).unwrap_or_default()
            );

            match write_report(&extraction, REPORT_PATH) {
                Ok(()) => println!("Data successfully written to {REPORT_PATH}"),
                Err(err) => {
                    error!(error = %err, "report write failed");
                    eprintln!("{err}");
                }
            }
        }
        Err(err) => {
            println!("{err}");
        }
    }
}
