//! Typed markup nodes and their serialization to HTML or Markdown.
//!
//! [`MarkupNode`] is the intermediate form shared by the walker, the ruby
//! reconstructor and the extractors. [`render`] turns a node sequence into
//! one of the two output syntaxes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// One node of rendered rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkupNode {
    Text { text: String },
    Bold { children: Vec<MarkupNode> },
    Heading { level: u8, text: String },
    Paragraph { children: Vec<MarkupNode> },
    List { items: Vec<Vec<MarkupNode>> },
    LineBreak,
    /// Base text with a phonetic reading. An empty `reading` displays `base` alone.
    Annotation { base: String, reading: String },
}

impl MarkupNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Builds an annotation, or `None` when `base` is empty.
    pub fn annotation(base: impl Into<String>, reading: impl Into<String>) -> Option<Self> {
        let base = base.into();
        if base.is_empty() {
            return None;
        }
        Some(Self::Annotation { base, reading: reading.into() })
    }
}

/// Output syntax for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Html,
    Markdown,
}

/// Serializes `nodes` into the syntax of `target`.
///
/// # Example
///
/// ```rust
/// use notecard_core::markup::{MarkupNode, RenderTarget, render};
///
/// let nodes = vec![MarkupNode::annotation("読", "よ").unwrap(), MarkupNode::text("む")];
/// assert_eq!(render(&nodes, RenderTarget::Html), "<ruby>読<rt>よ</rt></ruby>む");
/// assert_eq!(render(&nodes, RenderTarget::Markdown), "読よむ");
/// ```
pub fn render(nodes: &[MarkupNode], target: RenderTarget) -> String {
    let mut out = String::new();
    for node in nodes {
        match target {
            RenderTarget::Html => push_html(&mut out, node),
            RenderTarget::Markdown => push_markdown(&mut out, node),
        }
    }
    out
}

fn push_markdown(out: &mut String, node: &MarkupNode) {
    match node {
        MarkupNode::Text { text } => out.push_str(text),
        MarkupNode::Heading { level, text } => {
            out.push_str("\n\n");
            out.push_str(&"#".repeat(usize::from(*level)));
            out.push(' ');
            out.push_str(text);
            out.push_str("\n\n");
        }
        MarkupNode::Paragraph { children } => {
            out.push_str("\n\n");
            children.iter().for_each(|child| push_markdown(out, child));
            out.push_str("\n\n");
        }
        MarkupNode::Bold { children } => {
            out.push_str("**");
            children.iter().for_each(|child| push_markdown(out, child));
            out.push_str("**");
        }
        MarkupNode::List { items } => {
            out.push_str("\n\n");
            for item in items {
                out.push_str("- ");
                item.iter().for_each(|child| push_markdown(out, child));
                out.push('\n');
            }
            out.push('\n');
        }
        MarkupNode::LineBreak => out.push_str("\n\n"),
        MarkupNode::Annotation { base, reading } => {
            out.push_str(base);
            out.push_str(reading);
        }
    }
}

fn push_html(out: &mut String, node: &MarkupNode) {
    match node {
        MarkupNode::Text { text } => out.push_str(&escape_html(text)),
        MarkupNode::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{}</h{level}>", escape_html(text)));
        }
        MarkupNode::Paragraph { children } => {
            out.push_str("<p>");
            children.iter().for_each(|child| push_html(out, child));
            out.push_str("</p>");
        }
        MarkupNode::Bold { children } => {
            out.push_str("<strong>");
            children.iter().for_each(|child| push_html(out, child));
            out.push_str("</strong>");
        }
        MarkupNode::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                item.iter().for_each(|child| push_html(out, child));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        MarkupNode::LineBreak => out.push_str("<br>"),
        MarkupNode::Annotation { base, reading } if reading.is_empty() => out.push_str(&escape_html(base)),
        MarkupNode::Annotation { base, reading } => {
            out.push_str(&format!("<ruby>{}<rt>{}</rt></ruby>", escape_html(base), escape_html(reading)));
        }
    }
}

/// Escape the characters that would otherwise be read as markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

static TRAILING_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static EXTRA_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static EXTRA_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Whitespace cleanup applied to whole Markdown documents.
///
/// Drops horizontal whitespace at line ends, collapses three or more newlines
/// into a blank line and runs of spaces into one, then trims. Running it on
/// its own output changes nothing.
pub fn normalize_markdown(doc: &str) -> String {
    let doc = TRAILING_SPACE.replace_all(doc, "\n");
    let doc = EXTRA_NEWLINES.replace_all(&doc, "\n\n");
    let doc = EXTRA_SPACES.replace_all(&doc, " ");
    doc.trim().to_string()
}
