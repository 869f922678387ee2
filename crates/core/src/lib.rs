//! Turns a saved dictionary entry or job listing into a pasteable note.
//!
//! Word pages become a styled HTML flashcard; job pages become a normalized
//! Markdown note. Both go through the same [`MarkupNode`] tree, rendered per
//! [`RenderTarget`].
//!
//! ```rust
//! use notecard_core::{Document, ExtractConfig, PageKind, extract_card};
//!
//! let html = r#"<div class="jobs-search__job-details"><h2>Rust Engineer</h2></div>"#;
//! let doc = Document::parse(html).unwrap();
//! let card = extract_card(&doc, PageKind::Job, &ExtractConfig::default());
//!
//! assert!(card.render().body.starts_with("# Rust Engineer"));
//! ```

pub mod card;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod job;
pub mod markup;
pub mod parse;
pub mod ruby;
pub mod walker;
pub mod word;

pub use card::{Card, ContentType, PageKind, RenderedDocument, extract_card};
pub use clipboard::{Clipboard, Delivery, Notification, Notifier, deliver};
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use error::{NotecardError, Result};
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonRecord, convert_to_json, render_job_document, render_word_document};
pub use job::{CompanySection, JobRecord, extract_job};
pub use markup::{MarkupNode, RenderTarget, normalize_markdown, render};
pub use parse::{Document, Element, Node};
pub use ruby::reconstruct;
pub use walker::{element_to_markdown, walk};
pub use word::{CharacterEntry, ExampleSentence, SenseEntry, WordRecord, extract_word};
