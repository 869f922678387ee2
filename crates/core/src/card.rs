//! Page-level pipeline: pick an extractor, run it once, render the result.
//!
//! A [`Card`] is the outcome of one extraction. It is produced fresh per
//! call, rendered, and dropped; nothing is cached between invocations.

use tracing::debug;

use crate::config::ExtractConfig;
use crate::formatters::{JsonConfig, JsonRecord, convert_to_json, render_job_document, render_word_document};
use crate::job::{JOB_ROOTS, JobRecord, extract_job};
use crate::parse::Document;
use crate::word::{WordRecord, extract_word};
use crate::{NotecardError, Result};

/// The two supported page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A dictionary entry, rendered as an HTML flashcard.
    Word,
    /// A job listing, rendered as Markdown.
    Job,
}

impl PageKind {
    /// Guesses the layout from the containers present on the page.
    pub fn detect(doc: &Document) -> Option<Self> {
        if doc.select_first(".concept_light").is_some() {
            Some(Self::Word)
        } else if doc.select_first_of(JOB_ROOTS).is_some() {
            Some(Self::Job)
        } else {
            None
        }
    }
}

impl std::str::FromStr for PageKind {
    type Err = NotecardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "word" | "jisho" => Ok(Self::Word),
            "job" | "linkedin" => Ok(Self::Job),
            _ => Err(NotecardError::UnknownPageKind(s.to_string())),
        }
    }
}

/// MIME flavour of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Markdown,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Markdown => "text/plain",
        }
    }
}

/// A finished, pasteable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub body: String,
    pub content_type: ContentType,
}

/// The result of one extraction. `None` means the page held nothing usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Word(Option<WordRecord>),
    Job(Option<JobRecord>),
}

impl Card {
    /// Whether a record was extracted.
    pub fn is_found(&self) -> bool {
        match self {
            Self::Word(record) => record.is_some(),
            Self::Job(record) => record.is_some(),
        }
    }

    /// Renders the card in its page kind's output format.
    ///
    /// Always succeeds: a missing record renders as a fixed placeholder.
    pub fn render(&self) -> RenderedDocument {
        match self {
            Self::Word(record) => {
                RenderedDocument { body: render_word_document(record.as_ref()), content_type: ContentType::Html }
            }
            Self::Job(record) => {
                RenderedDocument { body: render_job_document(record.as_ref()), content_type: ContentType::Markdown }
            }
        }
    }

    /// Serializes the intermediate record instead of rendering it.
    pub fn to_json(&self, config: &JsonConfig) -> Result<String> {
        let record = match self {
            Self::Word(record) => JsonRecord::Word(record.as_ref()),
            Self::Job(record) => JsonRecord::Job(record.as_ref()),
        };
        convert_to_json(&record, config)
    }
}

/// Runs the extractor for `kind` against `doc`.
pub fn extract_card(doc: &Document, kind: PageKind, config: &ExtractConfig) -> Card {
    let card = match kind {
        PageKind::Word => Card::Word(extract_word(doc, config)),
        PageKind::Job => Card::Job(extract_job(doc, config)),
    };
    debug!(kind = ?kind, found = card.is_found(), "extraction finished");
    card
}
