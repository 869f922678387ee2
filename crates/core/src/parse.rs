//! HTML parsing and read-only DOM navigation.
//!
//! This module provides the [`Document`], [`Element`] and [`Node`] types the
//! extractors walk. A [`Document`] also carries the page location, standing
//! in for the browser's "current document URL".
//!
//! # Example
//!
//! ```rust
//! use notecard_core::parse::Document;
//!
//! let html = r#"<div class="concept_light"><span class="text">読む</span></div>"#;
//! let doc = Document::parse(html).unwrap();
//! let text = doc.select_first(".concept_light .text").map(|el| el.text());
//! assert_eq!(text.as_deref(), Some("読む"));
//! ```

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{NotecardError, Result};

/// Represents a parsed HTML document.
///
/// The tree is never mutated after parsing; every handle borrowed from it
/// lives at most as long as one extraction call.
pub struct Document {
    html: Html,
    location: Option<Url>,
}

impl Document {
    /// Parses HTML from a string with no known location.
    ///
    /// # Example
    ///
    /// ```rust
    /// use notecard_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><body><h1>Title</h1></body></html>").unwrap();
    /// assert!(doc.location().is_none());
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html, location: None })
    }

    /// Parses HTML and records the URL the page was loaded from.
    ///
    /// # Errors
    ///
    /// Returns [`NotecardError::InvalidUrl`] if `location` is not an absolute URL.
    pub fn parse_with_location(html: &str, location: &str) -> Result<Self> {
        let location = Url::parse(location).map_err(|e| NotecardError::InvalidUrl(e.to_string()))?;
        let html = Html::parse_document(html);
        Ok(Self { html, location: Some(location) })
    }

    /// The URL the page was loaded from, if known.
    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`NotecardError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use notecard_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(Element::from).collect())
    }

    /// Selects the first element matching a CSS selector.
    ///
    /// An invalid selector is treated like a miss.
    pub fn select_first(&'_ self, selector: &str) -> Option<Element<'_>> {
        let sel = compile(selector).ok()?;
        self.html.select(&sel).next().map(Element::from)
    }

    /// Returns the first element matched by any of `selectors`, tried in order.
    pub fn select_first_of(&'_ self, selectors: &[&str]) -> Option<Element<'_>> {
        selectors.iter().find_map(|selector| self.select_first(selector))
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| NotecardError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use notecard_core::parse::Document;
///
/// let html = r#"<div class="meaning-tags">Noun</div><div class="meaning-wrapper">dog</div>"#;
/// let doc = Document::parse(html).unwrap();
/// let wrapper = doc.select_first(".meaning-wrapper").unwrap();
///
/// assert_eq!(wrapper.text(), "dog");
/// assert!(wrapper.prev_element_sibling().unwrap().has_class("meaning-tags"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

/// A direct child of an [`Element`].
///
/// Comments, doctypes and processing instructions are never yielded.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Text(&'a str),
    Element(Element<'a>),
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Whether the element's class list contains `class` (case-sensitive).
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`NotecardError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(Element::from).collect())
    }

    /// Selects the first descendant matching a CSS selector.
    pub fn select_first(&self, selector: &str) -> Option<Element<'a>> {
        let sel = compile(selector).ok()?;
        self.element.select(&sel).next().map(Element::from)
    }

    /// The nearest preceding sibling that is an element.
    pub fn prev_element_sibling(&self) -> Option<Element<'a>> {
        self.element.prev_siblings().find_map(ElementRef::wrap).map(Element::from)
    }

    /// Direct children in document order.
    pub fn nodes(&self) -> Vec<Node<'a>> {
        self.element
            .children()
            .filter_map(|child| match child.value() {
                scraper::Node::Text(text) => Some(Node::Text(&text.text)),
                scraper::Node::Element(_) => ElementRef::wrap(child).map(|el| Node::Element(el.into())),
                _ => None,
            })
            .collect()
    }

    /// Direct element children in document order.
    pub fn child_elements(&self) -> Vec<Element<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::from).collect()
    }
}
