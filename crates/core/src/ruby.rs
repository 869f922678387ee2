//! Furigana reconstruction.
//!
//! Dictionary markup stores a word's display text and its reading in two
//! separate spans. [`reconstruct`] joins them back into one annotation,
//! attaching the reading to the leading run of ideographs only. Any kana
//! that follows (okurigana) stays plain.

use crate::markup::MarkupNode;

/// Whether `c` is a CJK unified ideograph (main block or extension A).
pub fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3400}'..='\u{4DBF}')
}

/// Combines `full` text and its `reading` into markup.
///
/// Only a single leading ideograph run is annotated. Text without an
/// ideograph prefix is returned plain and the reading is dropped, since it
/// would only repeat the kana already shown. If one side is empty, the other
/// side is returned as plain text.
///
/// # Example
///
/// ```rust
/// use notecard_core::markup::MarkupNode;
/// use notecard_core::ruby::reconstruct;
///
/// let nodes = reconstruct("読む", "よ");
/// assert_eq!(nodes, vec![
///     MarkupNode::Annotation { base: "読".to_string(), reading: "よ".to_string() },
///     MarkupNode::text("む"),
/// ]);
/// assert_eq!(reconstruct("だけ", "だけ"), vec![MarkupNode::text("だけ")]);
/// ```
pub fn reconstruct(full: &str, reading: &str) -> Vec<MarkupNode> {
    match (full.is_empty(), reading.is_empty()) {
        (true, true) => return Vec::new(),
        (true, false) => return vec![MarkupNode::text(reading)],
        (false, true) => return vec![MarkupNode::text(full)],
        (false, false) => {}
    }

    let split = full.find(|c: char| !is_ideograph(c)).unwrap_or(full.len());
    let (base, rest) = full.split_at(split);

    let Some(annotation) = MarkupNode::annotation(base, reading) else {
        return vec![MarkupNode::text(full)];
    };

    let mut nodes = vec![annotation];
    if !rest.is_empty() {
        nodes.push(MarkupNode::text(rest));
    }
    nodes
}
