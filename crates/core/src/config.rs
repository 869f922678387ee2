//! Extraction settings.
//!
//! The filters here are substring heuristics tied to the current markup of
//! the two source sites, so they are configurable rather than baked in.
//!
//! # Example
//!
//! ```rust
//! use notecard_core::ExtractConfig;
//!
//! let config = ExtractConfig::builder()
//!     .exclude_tag_marker("JLPT")
//!     .meta_separator(" | ")
//!     .build();
//! assert!(!config.keeps_tag("JLPT N5"));
//! assert!(!config.keeps_tag("Wanikani level 3"));
//! ```

/// Configuration for word and job extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Tags whose text contains any of these are dropped (default: `["Wanikani"]`).
    pub excluded_tag_markers: Vec<String>,

    /// Job meta fragments containing any of these are dropped (default: `[" · "]`).
    pub excluded_meta_markers: Vec<String>,

    /// Part-of-speech label that marks the alternate forms block (default: `"Other forms"`).
    pub other_forms_label: String,

    /// Separator between alternate forms in the source (default: `'、'`).
    pub other_forms_separator: char,

    /// Joins kun/on readings of one character (default: `"、 "`).
    pub reading_separator: String,

    /// Joins the kept job meta fragments (default: `" • "`).
    pub meta_separator: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            excluded_tag_markers: vec!["Wanikani".to_string()],
            excluded_meta_markers: vec![" · ".to_string()],
            other_forms_label: "Other forms".to_string(),
            other_forms_separator: '、',
            reading_separator: "、 ".to_string(),
            meta_separator: " • ".to_string(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }

    /// Whether a dictionary tag survives the tag filter (case-sensitive).
    pub fn keeps_tag(&self, tag: &str) -> bool {
        !self.excluded_tag_markers.iter().any(|marker| tag.contains(marker.as_str()))
    }

    /// Whether a job meta fragment survives the meta filter.
    pub fn keeps_meta(&self, fragment: &str) -> bool {
        !self.excluded_meta_markers.iter().any(|marker| fragment.contains(marker.as_str()))
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Adds a tag marker to the exclusion list.
    pub fn exclude_tag_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.excluded_tag_markers.push(marker.into());
        self
    }

    /// Replaces the tag exclusion list.
    pub fn excluded_tag_markers(mut self, markers: Vec<String>) -> Self {
        self.config.excluded_tag_markers = markers;
        self
    }

    /// Adds a meta marker to the exclusion list.
    pub fn exclude_meta_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.excluded_meta_markers.push(marker.into());
        self
    }

    /// Replaces the meta exclusion list.
    pub fn excluded_meta_markers(mut self, markers: Vec<String>) -> Self {
        self.config.excluded_meta_markers = markers;
        self
    }

    pub fn other_forms_label(mut self, label: impl Into<String>) -> Self {
        self.config.other_forms_label = label.into();
        self
    }

    pub fn other_forms_separator(mut self, separator: char) -> Self {
        self.config.other_forms_separator = separator;
        self
    }

    pub fn reading_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.reading_separator = separator.into();
        self
    }

    pub fn meta_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.meta_separator = separator.into();
        self
    }

    /// Builds the ExtractConfig.
    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert!(config.keeps_tag("Common word"));
        assert!(!config.keeps_tag("Wanikani level 12"));
        assert!(config.keeps_tag("wanikani"));
        assert!(config.keeps_meta("Remote"));
        assert!(!config.keeps_meta("Berlin · 2 days ago"));
    }

    #[test]
    fn test_builder_replaces_lists() {
        let config = ExtractConfig::builder()
            .excluded_tag_markers(Vec::new())
            .excluded_meta_markers(vec!["Promoted".to_string()])
            .build();

        assert!(config.keeps_tag("Wanikani level 12"));
        assert!(config.keeps_meta("Berlin · 2 days ago"));
        assert!(!config.keeps_meta("Promoted by hirer"));
    }

    #[test]
    fn test_builder_separators() {
        let config = ExtractConfig::builder()
            .other_forms_label("Alternative")
            .other_forms_separator(',')
            .reading_separator(", ")
            .build();

        assert_eq!(config.other_forms_label, "Alternative");
        assert_eq!(config.other_forms_separator, ',');
        assert_eq!(config.reading_separator, ", ");
        assert_eq!(config.meta_separator, " • ");
    }
}
