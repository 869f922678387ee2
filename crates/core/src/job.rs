//! Job listing extraction.
//!
//! Reads the job details pane of a LinkedIn jobs page into a [`JobRecord`].
//! A listing without a title is unusable and yields `None`; every other
//! field degrades to `None` or a placeholder.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::ExtractConfig;
use crate::markup::MarkupNode;
use crate::parse::{Document, Element};
use crate::walker::{element_to_markdown, walk_element};

/// Candidate roots for the job pane, tried in order.
pub const JOB_ROOTS: &[&str] = &[".jobs-search__job-details", "main", "[role=\"main\"]"];

const TITLE_SELECTORS: &[&str] = &["h2", "h1"];
const COMPANY: &str = ".job-details-jobs-unified-top-card__company-name a";
const META_FRAGMENTS: &str = ".jobs-search__job-details .tvm__text.tvm__text--low-emphasis";
const DESCRIPTION: &str = "#job-details";
const COMPANY_BOX: &str = ".jobs-company__box";
const COMPANY_LINK: &str = "a[href*=\"/company/\"]";
const COMPANY_META: &str = ".t-14.mt5";
const COMPANY_DESCRIPTION: &str = ".jobs-company__company-description div";

/// Heading used when the company box has none.
pub const DEFAULT_COMPANY_HEADING: &str = "About the company";

/// A job listing ready to be rendered as Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    pub title: String,
    pub company: Option<String>,
    pub meta_line: Option<String>,
    /// Walked `#job-details` content; `None` renders as a placeholder.
    pub description: Option<Vec<MarkupNode>>,
    pub source_url: String,
    pub company_section: Option<CompanySection>,
}

impl JobRecord {
    /// A record with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: None,
            meta_line: None,
            description: None,
            source_url: String::new(),
            company_section: None,
        }
    }
}

/// The "About the company" box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySection {
    pub heading: String,
    pub name: String,
    pub meta: String,
    /// Markdown, with truncation affordances removed.
    pub description: String,
}

/// Extracts the listing on `doc`, or `None` when no title can be found.
///
/// # Example
///
/// ```rust
/// use notecard_core::{Document, ExtractConfig, extract_job};
///
/// let html = r#"<div class="jobs-search__job-details"><h2> Rust Engineer </h2></div>"#;
/// let doc = Document::parse_with_location(html, "https://www.linkedin.com/jobs/view/1/?ref=x").unwrap();
/// let job = extract_job(&doc, &ExtractConfig::default()).unwrap();
/// assert_eq!(job.title, "Rust Engineer");
/// assert_eq!(job.source_url, "https://www.linkedin.com/jobs/view/1/");
/// ```
pub fn extract_job(doc: &Document, config: &ExtractConfig) -> Option<JobRecord> {
    let Some(root) = doc.select_first_of(JOB_ROOTS) else {
        debug!("job pane not found");
        return None;
    };

    let Some(title) = TITLE_SELECTORS.iter().find_map(|selector| cleaned_text(root.select_first(selector))) else {
        debug!("job title not found");
        return None;
    };

    let record = JobRecord {
        title,
        company: cleaned_text(root.select_first(COMPANY)),
        meta_line: meta_line(doc, config),
        description: doc.select_first(DESCRIPTION).map(walk_element),
        source_url: source_url(doc),
        company_section: doc.select_first(COMPANY_BOX).map(extract_company),
    };

    debug!(
        title = %record.title,
        has_description = record.description.is_some(),
        has_company = record.company_section.is_some(),
        "extracted job record"
    );

    Some(record)
}

fn meta_line(doc: &Document, config: &ExtractConfig) -> Option<String> {
    let fragments: Vec<String> = doc
        .select(META_FRAGMENTS)
        .unwrap_or_default()
        .into_iter()
        .map(|fragment| fragment.text())
        .filter(|fragment| config.keeps_meta(fragment))
        .collect();

    let line = clean(&fragments.join(&config.meta_separator));
    if line.is_empty() { None } else { Some(line) }
}

fn extract_company(container: Element<'_>) -> CompanySection {
    let heading = container
        .select_first("h2")
        .map(|h| h.text().trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPANY_HEADING.to_string());

    let name = container
        .select_first(COMPANY_LINK)
        .map(|link| link.text().trim().to_string())
        .unwrap_or_default();

    let meta = container
        .select_first(COMPANY_META)
        .map(|meta| clean(&meta.text()))
        .unwrap_or_default();

    let description = container
        .select_first(COMPANY_DESCRIPTION)
        .map(|description| strip_truncation(&element_to_markdown(description)))
        .unwrap_or_default();

    CompanySection { heading, name, meta, description }
}

/// Removes the "show more" toggle text and a trailing ellipsis left by a collapsed description.
pub fn strip_truncation(text: &str) -> String {
    text.replace("show more", "").trim_end().trim_end_matches('…').trim_end().to_string()
}

/// The document location without its query string or fragment.
fn source_url(doc: &Document) -> String {
    let Some(location) = doc.location() else {
        return String::new();
    };
    let mut url = location.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}

static RUNS_OF_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Flattens a single-line field: every whitespace run, newlines included, becomes one space.
fn clean(text: &str) -> String {
    RUNS_OF_WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn cleaned_text(element: Option<Element<'_>>) -> Option<String> {
    let text = clean(&element?.text());
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANE: &str = r#"
        <div class="jobs-search__job-details">
          <h1>Fallback title</h1>
          <h2>  Senior   Rust Engineer  </h2>
          <div class="job-details-jobs-unified-top-card__company-name"><a href="/company/ferris/">Ferris Labs</a></div>
          <div class="job-details-jobs-unified-top-card__tertiary-description">
            <span class="tvm__text tvm__text--low-emphasis">Berlin, Germany · 3 days ago</span>
            <span class="tvm__text tvm__text--low-emphasis">Remote</span>
            <span class="tvm__text tvm__text--low-emphasis">Full-time</span>
          </div>
          <div id="job-details">
            <h2>About the job</h2>
            <p><strong>Role:</strong> build parsers.</p>
            <ul><li>Rust</li><li>HTML</li></ul>
          </div>
        </div>
        <section class="jobs-company__box">
          <a href="https://www.linkedin.com/company/ferris/life">Ferris Labs</a>
          <div class="t-14 mt5">Software Development    11-50 employees</div>
          <div class="jobs-company__company-description"><div>We build tools. <br>Lots of them… show more</div></div>
        </section>
    "#;

    fn pane() -> JobRecord {
        let doc = Document::parse_with_location(PANE, "https://www.linkedin.com/jobs/view/42/?trk=abc#top").unwrap();
        extract_job(&doc, &ExtractConfig::default()).unwrap()
    }

    #[test]
    fn test_title_prefers_h2() {
        assert_eq!(pane().title, "Senior Rust Engineer");
    }

    #[test]
    fn test_title_falls_back_to_h1() {
        let doc = Document::parse(r#"<main><h1>Data Engineer</h1><h2>   </h2></main>"#).unwrap();
        let job = extract_job(&doc, &ExtractConfig::default()).unwrap();
        assert_eq!(job.title, "Data Engineer");
    }

    #[test]
    fn test_missing_pane_or_title() {
        let config = ExtractConfig::default();

        let doc = Document::parse("<div><h2>Not a job page</h2></div>").unwrap();
        assert!(extract_job(&doc, &config).is_none());

        let doc = Document::parse(r#"<div class="jobs-search__job-details"><p>loading</p></div>"#).unwrap();
        assert!(extract_job(&doc, &config).is_none());
    }

    #[test]
    fn test_company_and_meta() {
        let job = pane();
        assert_eq!(job.company.as_deref(), Some("Ferris Labs"));
        assert_eq!(job.meta_line.as_deref(), Some("Remote • Full-time"));
    }

    #[test]
    fn test_source_url_drops_query() {
        assert_eq!(pane().source_url, "https://www.linkedin.com/jobs/view/42/");
    }

    #[test]
    fn test_description_is_walked() {
        let description = pane().description.unwrap();
        assert!(description.contains(&MarkupNode::Heading { level: 2, text: "About the job".to_string() }));
        assert!(description.iter().any(|node| matches!(node, MarkupNode::List { items } if items.len() == 2)));
    }

    #[test]
    fn test_company_section() {
        let company = pane().company_section.unwrap();
        assert_eq!(company.heading, DEFAULT_COMPANY_HEADING);
        assert_eq!(company.name, "Ferris Labs");
        assert_eq!(company.meta, "Software Development 11-50 employees");
        assert_eq!(company.description, "We build tools. \n\nLots of them");
    }

    #[test]
    fn test_absent_optional_fields() {
        let doc = Document::parse(r#"<div class="jobs-search__job-details"><h2>Solo</h2></div>"#).unwrap();
        let job = extract_job(&doc, &ExtractConfig::default()).unwrap();
        assert_eq!(job, JobRecord::titled("Solo"));
    }

    #[test]
    fn test_multiline_fields_stay_on_one_line() {
        let html = r#"
            <div class="jobs-search__job-details">
              <h2>
                <a>Senior
                    Rust Engineer</a>
              </h2>
              <span class="tvm__text tvm__text--low-emphasis">Remote
                    (Hybrid)</span>
              <span class="tvm__text tvm__text--low-emphasis">Full-time</span>
            </div>
        "#;
        let job = extract_job(&Document::parse(html).unwrap(), &ExtractConfig::default()).unwrap();

        assert_eq!(job.title, "Senior Rust Engineer");
        assert_eq!(job.meta_line.as_deref(), Some("Remote (Hybrid) • Full-time"));

        let md = crate::formatters::render_job_document(Some(&job));
        assert!(md.starts_with("# Senior Rust Engineer\n\n**Company:** —\n**Details:** Remote (Hybrid) • Full-time\n"));
    }

    #[test]
    fn test_strip_truncation() {
        assert_eq!(strip_truncation("Great place to work…\n\nshow more"), "Great place to work");
        assert_eq!(strip_truncation("No affordances"), "No affordances");
    }
}
