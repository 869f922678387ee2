//! Recursive HTML-to-markup conversion.
//!
//! The walker never fails: unknown tags are walked through transparently so
//! text inside unexpected markup is kept, and an empty subtree yields an
//! empty sequence.

use crate::markup::{MarkupNode, RenderTarget, render};
use crate::parse::{Element, Node};

/// How the walker treats an element, by tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    Heading2,
    Paragraph,
    Strong,
    UnorderedList,
    ListItem,
    LineBreak,
    /// Any other tag: children are emitted without a wrapper.
    Passthrough,
}

impl SourceTag {
    /// Classifies a tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h2" => Self::Heading2,
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "ul" => Self::UnorderedList,
            "li" => Self::ListItem,
            "br" => Self::LineBreak,
            _ => Self::Passthrough,
        }
    }
}

/// Converts one DOM node into markup nodes.
pub fn walk(node: Node<'_>) -> Vec<MarkupNode> {
    match node {
        Node::Text(text) => vec![MarkupNode::text(text)],
        Node::Element(element) => walk_element(element),
    }
}

/// Converts an element and its subtree into markup nodes.
pub fn walk_element(element: Element<'_>) -> Vec<MarkupNode> {
    match SourceTag::from_name(&element.tag_name()) {
        SourceTag::Heading2 => vec![MarkupNode::Heading { level: 2, text: element.text().trim().to_string() }],
        SourceTag::Paragraph => vec![MarkupNode::Paragraph { children: walk_children(element) }],
        SourceTag::Strong => vec![MarkupNode::Bold { children: walk_children(element) }],
        SourceTag::UnorderedList => {
            let items = element
                .child_elements()
                .into_iter()
                .filter(|child| SourceTag::from_name(&child.tag_name()) == SourceTag::ListItem)
                .map(walk_children)
                .collect();
            vec![MarkupNode::List { items }]
        }
        SourceTag::LineBreak => vec![MarkupNode::LineBreak],
        SourceTag::ListItem | SourceTag::Passthrough => walk_children(element),
    }
}

/// Walks every direct child of `element` and concatenates the results.
pub fn walk_children(element: Element<'_>) -> Vec<MarkupNode> {
    element.nodes().into_iter().flat_map(walk).collect()
}

/// Walks `element` and renders the result as trimmed Markdown.
///
/// # Example
///
/// ```rust
/// use notecard_core::parse::Document;
/// use notecard_core::walker::element_to_markdown;
///
/// let doc = Document::parse("<div id='d'><strong>Hi</strong><ul><li>a</li><li>b</li></ul></div>").unwrap();
/// let md = element_to_markdown(doc.select_first("#d").unwrap());
/// assert_eq!(md, "**Hi**\n\n- a\n- b");
/// ```
pub fn element_to_markdown(element: Element<'_>) -> String {
    render(&walk_element(element), RenderTarget::Markdown).trim().to_string()
}
