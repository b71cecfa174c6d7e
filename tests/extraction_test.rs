use newsclip::{extract, write_report, SelectorConfig, CONTENT_PLACEHOLDER};
use std::collections::HashMap;

fn article_config() -> SelectorConfig {
    SelectorConfig {
        content_selector: "div.body__content".to_string(),
        metadata: HashMap::from([
            (
                "publication_timestamp".to_string(),
                "p.article-timestamp".to_string(),
            ),
            ("author".to_string(), "span.article-author".to_string()),
        ]),
    }
}

const FIXTURE: &str = r#"
    <html>
      <head><title>Acme and Globex strike a deal</title></head>
      <body>
        <nav>Markets | News | Watchlist</nav>
        <p class="article-timestamp">Jan 1, 2024</p>
        <span class="article-author">Jane Doe</span>
        <div class="body__content">Acme Corp announced a deal with Globex Inc today.</div>
        <footer>Copyright 2024</footer>
      </body>
    </html>
"#;

#[test]
fn extracts_content_metadata_and_organizations() {
    let extraction = extract(FIXTURE, &article_config());

    assert!(extraction.content.contains("Acme Corp announced"));
    assert_eq!(extraction.metadata["publication_timestamp"], "Jan 1, 2024");
    assert_eq!(extraction.metadata["author"], "Jane Doe");
    assert!(extraction.organizations.contains("Acme Corp"));
    assert!(extraction.organizations.contains("Globex Inc"));
    assert_eq!(extraction.organizations.len(), 2);
}

#[test]
fn end_to_end_fixture_report() {
    let extraction = extract(FIXTURE, &article_config());

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("extracted_data.txt");
    write_report(&extraction, &path).expect("report written");

    let report = std::fs::read_to_string(&path).expect("report readable");
    assert!(report.contains("- Acme Corp\n"));
    assert!(report.contains("- Globex Inc\n"));
    assert!(report.contains("Publication Time:\n- Jan 1, 2024\n"));
    assert!(report.contains("Author:\n- Jane Doe\n"));
    assert!(report.contains("Topics:\n- Not Available\n"));
}

#[test]
fn repeated_mentions_collapse_to_one_entry() {
    let html = r#"
        <html><body>
          <div class="body__content">
            Acme Corp led gains. Later, Acme Corp confirmed the report, and
            Acme Corp shares closed higher.
          </div>
        </body></html>
    "#;

    let extraction = extract(html, &article_config());
    assert_eq!(extraction.organizations.len(), 1);
    assert!(extraction.organizations.contains("Acme Corp"));
}

#[test]
fn missing_content_selector_yields_placeholder() {
    let html = "<html><body><p>No article container here.</p></body></html>";
    let extraction = extract(html, &article_config());
    assert_eq!(extraction.content, CONTENT_PLACEHOLDER);
    assert!(extraction.organizations.is_empty());
}

#[test]
fn missing_metadata_selector_yields_field_placeholder() {
    let html = r#"
        <html><body>
          <div class="body__content">Body text.</div>
          <span class="article-author">Jane Doe</span>
        </body></html>
    "#;

    let extraction = extract(html, &article_config());
    assert_eq!(
        extraction.metadata["publication_timestamp"],
        "publication_timestamp not available"
    );
    assert_eq!(extraction.metadata["author"], "Jane Doe");
}

#[test]
fn published_normalized_from_byline_timestamp() {
    let extraction = extract(FIXTURE, &article_config());
    let published = extraction.published.expect("timestamp should parse");
    assert_eq!(published.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn does_not_panic_on_malformed_html() {
    let html = "<p>text<div class=\"body__content\">Acme Corp said more";
    let extraction = extract(html, &article_config());
    assert!(extraction.content.contains("Acme Corp") || extraction.content == CONTENT_PLACEHOLDER);
}

#[test]
fn empty_document_is_all_placeholders() {
    let extraction = extract("", &article_config());
    assert_eq!(extraction.content, CONTENT_PLACEHOLDER);
    assert_eq!(
        extraction.metadata["author"],
        "author not available"
    );
    assert!(extraction.organizations.is_empty());
    assert!(extraction.published.is_none());
}
