//! Error types for notecard operations.
//!
//! Extraction and rendering never fail: a missing selector is absorbed as an
//! absent field or a `None` record. [`NotecardError`] only covers the edges
//! of the pipeline, where input is read, selectors are compiled, locations
//! are parsed and finished documents are handed to a clipboard.
//!
//! # Example
//!
//! ```rust
//! use notecard_core::{NotecardError, Result};
//!
//! fn read_page(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(NotecardError::HtmlParseError("empty input".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notecard operations.
#[derive(Error, Debug)]
pub enum NotecardError {
    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector cannot be compiled.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A page kind name that is neither `word` nor `job`.
    #[error("Unknown page kind: {0} (expected word or job)")]
    UnknownPageKind(String),

    /// Invalid document location.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    ///
    /// Returned when attempting to read a page that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading input failed.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),

    /// Both the rich and the plain clipboard writes failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// A record could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for NotecardError.
pub type Result<T> = std::result::Result<T, NotecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotecardError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_clipboard_error() {
        let err = NotecardError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard write failed: no display");
    }

    #[test]
    fn test_file_not_found_error() {
        let err = NotecardError::FileNotFound(PathBuf::from("/missing/page.html"));
        assert!(err.to_string().contains("/missing/page.html"));
    }
}
