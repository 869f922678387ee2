//! Dictionary entry extraction.
//!
//! Reads a jisho.org style entry page into a [`WordRecord`]. The page is
//! third-party markup, so every field is optional except where a missing
//! value makes the entry meaningless (a sense without a definition, a
//! character block without a glyph); those entries are skipped.

use serde::Serialize;
use tracing::debug;

use crate::config::ExtractConfig;
use crate::markup::MarkupNode;
use crate::parse::{Document, Element, Node};
use crate::ruby::reconstruct;

const CONTAINER: &str = ".concept_light";
const REPRESENTATION: &str = ".concept_light-representation";
const FURIGANA: &str = ".furigana";
const TEXT: &str = ".text";
const TAG: &str = ".concept_light-tag";
const MEANING_WRAPPER: &str = ".meaning-wrapper";
const MEANING_TAGS_CLASS: &str = "meaning-tags";
const MEANING: &str = ".meaning-meaning";
const SUPPLEMENTAL: &str = ".supplemental_info";
const SENTENCE: &str = ".sentence";
const SENTENCE_SOURCE: &str = ".japanese";
const SENTENCE_TRANSLATION: &str = ".english";
const UNLINKED: &str = ".unlinked";
const CHARACTER_BLOCK: &str = ".kanji_light";
const LITERAL: &str = ".literal";
const CHARACTER_MEANING: &str = ".meanings.english";
const KUN_READINGS: &str = ".kun.readings";
const ON_READINGS: &str = ".on.readings";

/// Everything a flashcard needs about one dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// Display form with all whitespace removed.
    pub word: String,
    pub kanji_form: Option<String>,
    pub furigana_reading: Option<String>,
    /// Source order, duplicates kept.
    pub tags: Vec<String>,
    pub senses: Vec<SenseEntry>,
    pub alternate_forms: Vec<String>,
    pub characters: Vec<CharacterEntry>,
}

/// One meaning of the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SenseEntry {
    pub part_of_speech: Option<String>,
    pub definition: String,
    pub notes: Option<String>,
    pub examples: Vec<ExampleSentence>,
}

/// A usage example; `source` may carry furigana annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleSentence {
    pub source: Vec<MarkupNode>,
    pub translation: String,
}

/// Breakdown of one kanji used in the word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    pub glyph: String,
    pub meaning: Option<String>,
    pub kun_readings: Option<String>,
    pub on_readings: Option<String>,
}

/// Extracts the entry on `doc`, or `None` when the entry container is absent.
///
/// # Example
///
/// ```rust
/// use notecard_core::{Document, ExtractConfig, extract_word};
///
/// let doc = Document::parse("<p>still loading</p>").unwrap();
/// assert!(extract_word(&doc, &ExtractConfig::default()).is_none());
/// ```
pub fn extract_word(doc: &Document, config: &ExtractConfig) -> Option<WordRecord> {
    let Some(container) = doc.select_first(CONTAINER) else {
        debug!(selector = CONTAINER, "word container not found");
        return None;
    };

    let mut record = WordRecord::default();

    if let Some(representation) = container.select_first(REPRESENTATION) {
        record.word = squeeze(&representation.text());

        if let (Some(furigana), Some(text)) =
            (representation.select_first(FURIGANA), representation.select_first(TEXT))
        {
            record.furigana_reading = Some(squeeze(&furigana.text()));
            record.kanji_form = Some(squeeze(&text.text()));
        }
    }

    record.tags = container
        .select(TAG)
        .unwrap_or_default()
        .into_iter()
        .map(|tag| tag.text().trim().to_string())
        .filter(|tag| !tag.is_empty() && config.keeps_tag(tag))
        .collect();

    let wrappers = container.select(MEANING_WRAPPER).unwrap_or_default();

    record.senses = wrappers
        .iter()
        .filter_map(|wrapper| extract_sense(*wrapper))
        .filter(|sense| {
            !sense
                .part_of_speech
                .as_deref()
                .is_some_and(|pos| pos.contains(config.other_forms_label.as_str()))
        })
        .collect();

    record.alternate_forms = wrappers
        .iter()
        .find(|wrapper| {
            wrapper
                .prev_element_sibling()
                .is_some_and(|prev| prev.text().contains(config.other_forms_label.as_str()))
        })
        .and_then(|wrapper| wrapper.select_first(MEANING))
        .map(|forms| split_forms(&forms.text(), config.other_forms_separator))
        .unwrap_or_default();

    record.characters = doc
        .select(CHARACTER_BLOCK)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|block| extract_character(block, &config.reading_separator))
        .collect();

    debug!(
        word = %record.word,
        senses = record.senses.len(),
        characters = record.characters.len(),
        "extracted word record"
    );

    Some(record)
}

fn extract_sense(wrapper: Element<'_>) -> Option<SenseEntry> {
    let definition = trimmed_text(wrapper.select_first(MEANING))?;

    let part_of_speech = wrapper
        .prev_element_sibling()
        .filter(|prev| prev.has_class(MEANING_TAGS_CLASS))
        .map(|prev| prev.text().trim().to_string());

    let examples = wrapper
        .select(SENTENCE)
        .unwrap_or_default()
        .into_iter()
        .filter_map(extract_example)
        .collect();

    Some(SenseEntry { part_of_speech, definition, notes: trimmed_text(wrapper.select_first(SUPPLEMENTAL)), examples })
}

fn extract_example(sentence: Element<'_>) -> Option<ExampleSentence> {
    let source_region = sentence.select_first(SENTENCE_SOURCE)?;
    let translation = sentence.select_first(SENTENCE_TRANSLATION)?;

    let mut source = Vec::new();
    for node in source_region.nodes() {
        match node {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    source.push(MarkupNode::text(text));
                }
            }
            Node::Element(token) if token.tag_name() == "li" => source.extend(example_token(token)),
            // Only `li` tokens carry words; other elements count toward the fallback text alone.
            Node::Element(other) => debug!(tag = %other.tag_name(), "skipping non-token element in example"),
        }
    }

    if source.is_empty() {
        let fallback = squeeze(&source_region.text());
        if !fallback.is_empty() {
            source.push(MarkupNode::text(fallback));
        }
    }

    Some(ExampleSentence { source, translation: translation.text().trim().to_string() })
}

/// One word of an example sentence: a `.unlinked` span with an optional `.furigana` reading.
fn example_token(token: Element<'_>) -> Vec<MarkupNode> {
    let Some(unlinked) = token.select_first(UNLINKED) else {
        return Vec::new();
    };
    let full = unlinked.text().trim().to_string();

    match token.select_first(FURIGANA) {
        Some(furigana) => reconstruct(&full, furigana.text().trim()),
        None if full.is_empty() => Vec::new(),
        None => vec![MarkupNode::text(full)],
    }
}

fn extract_character(block: Element<'_>, separator: &str) -> Option<CharacterEntry> {
    let glyph = trimmed_text(block.select_first(LITERAL))?;

    Some(CharacterEntry {
        glyph,
        meaning: trimmed_text(block.select_first(CHARACTER_MEANING)),
        kun_readings: joined_readings(block.select_first(KUN_READINGS), separator),
        on_readings: joined_readings(block.select_first(ON_READINGS), separator),
    })
}

fn joined_readings(container: Option<Element<'_>>, separator: &str) -> Option<String> {
    let readings: Vec<String> = container?
        .select("a")
        .unwrap_or_default()
        .into_iter()
        .map(|link| link.text().trim().to_string())
        .filter(|reading| !reading.is_empty())
        .collect();

    if readings.is_empty() { None } else { Some(readings.join(separator)) }
}

/// Splits an alternate-forms list, trimming pieces and dropping empty ones.
pub fn split_forms(text: &str, separator: char) -> Vec<String> {
    text.trim()
        .split(separator)
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}

fn trimmed_text(element: Option<Element<'_>>) -> Option<String> {
    let text = element?.text();
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}

/// Removes every whitespace character.
fn squeeze(text: &str) -> String {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"
        <div class="concept_light">
          <div class="concept_light-readings">
            <div class="concept_light-representation">
              <span class="furigana"><span>よ</span></span>
              <span class="text">
                読む
              </span>
            </div>
          </div>
          <span class="concept_light-tag">Common word</span>
          <span class="concept_light-tag">JLPT N5</span>
          <span class="concept_light-tag">Wanikani level 5</span>
          <span class="concept_light-tag">JLPT N5</span>
          <div class="meanings-wrapper">
            <div class="meaning-tags">Godan verb with 'mu' ending, Transitive verb</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition">
                <span class="meaning-meaning">to read</span>
                <span class="supplemental_info">usu. 読む</span>
              </div>
              <div class="sentence">
                <ul class="japanese">
                  <li class="clearfix"><span class="furigana">ほん</span><span class="unlinked">本</span></li>
                  <li class="clearfix"><span class="unlinked">を</span></li>
                  <li class="clearfix"><span class="furigana">よ</span><span class="unlinked">読む</span></li>
                  。
                </ul>
                <span class="english">I read a book.</span>
              </div>
              <div class="sentence">
                <ul class="japanese"><li><span class="unlinked">だけ</span></li></ul>
              </div>
            </div>
            <div class="meaning-wrapper">
              <span class="meaning-meaning">   </span>
            </div>
            <div class="meaning-wrapper">
              <span class="meaning-meaning">to guess</span>
            </div>
            <div class="meaning-tags">Other forms</div>
            <div class="meaning-wrapper">
              <span class="meaning-meaning">詠む 【よむ】、 訓む 【よむ】、 </span>
            </div>
          </div>
        </div>
        <div class="kanji_light">
          <div class="literal">読</div>
          <div class="meanings english">read</div>
          <div class="kun readings">Kun: <a>よ.む</a>、 <a>-よ.み</a></div>
          <div class="on readings">On: <a>ドク</a>、 <a>トク</a>、 <a>トウ</a></div>
        </div>
        <div class="kanji_light">
          <div class="literal">  </div>
        </div>
        <div class="kanji_light">
          <div class="literal">本</div>
          <div class="kun readings"></div>
        </div>
    "#;

    fn entry() -> WordRecord {
        let doc = Document::parse(ENTRY).unwrap();
        extract_word(&doc, &ExtractConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_container() {
        let doc = Document::parse("<div class=\"meaning-wrapper\">x</div>").unwrap();
        assert!(extract_word(&doc, &ExtractConfig::default()).is_none());
    }

    #[test]
    fn test_reading_block() {
        let record = entry();
        assert_eq!(record.word, "よ読む");
        assert_eq!(record.kanji_form.as_deref(), Some("読む"));
        assert_eq!(record.furigana_reading.as_deref(), Some("よ"));
    }

    #[test]
    fn test_reading_without_furigana() {
        let doc =
            Document::parse(r#"<div class="concept_light"><div class="concept_light-representation"> だ け </div></div>"#)
                .unwrap();
        let record = extract_word(&doc, &ExtractConfig::default()).unwrap();
        assert_eq!(record.word, "だけ");
        assert!(record.kanji_form.is_none());
        assert!(record.furigana_reading.is_none());
    }

    #[test]
    fn test_tags_filtered_in_order() {
        assert_eq!(entry().tags, vec!["Common word", "JLPT N5", "JLPT N5"]);
    }

    #[test]
    fn test_senses() {
        let senses = entry().senses;
        assert_eq!(senses.len(), 2);

        assert_eq!(senses[0].part_of_speech.as_deref(), Some("Godan verb with 'mu' ending, Transitive verb"));
        assert_eq!(senses[0].definition, "to read");
        assert_eq!(senses[0].notes.as_deref(), Some("usu. 読む"));

        assert_eq!(senses[1].definition, "to guess");
        assert!(senses[1].part_of_speech.is_none());
        assert!(senses[1].examples.is_empty());
    }

    #[test]
    fn test_examples_rebuild_furigana() {
        let examples = &entry().senses[0].examples;
        assert_eq!(examples.len(), 1);

        let expected = vec![
            MarkupNode::Annotation { base: "本".to_string(), reading: "ほん".to_string() },
            MarkupNode::text("を"),
            MarkupNode::Annotation { base: "読".to_string(), reading: "よ".to_string() },
            MarkupNode::text("む"),
            MarkupNode::text("。"),
        ];
        assert_eq!(examples[0].source, expected);
        assert_eq!(examples[0].translation, "I read a book.");
    }

    #[test]
    fn test_other_forms() {
        let record = entry();
        assert_eq!(record.alternate_forms, vec!["詠む 【よむ】", "訓む 【よむ】"]);
        assert!(record.senses.iter().all(|sense| !sense.definition.contains("詠む")));
    }

    fn example_from(source_region: &str) -> ExampleSentence {
        let html = format!(r#"<div class="sentence">{source_region}<span class="english">The dog runs.</span></div>"#);
        let doc = Document::parse(&html).unwrap();
        extract_example(doc.select_first(".sentence").unwrap()).unwrap()
    }

    #[test]
    fn test_example_falls_back_to_region_text() {
        let example = example_from(r#"<div class="japanese"><span>犬 が</span> <span>走る</span></div>"#);

        assert_eq!(example.source, vec![MarkupNode::text("犬が走る")]);
        assert_eq!(example.translation, "The dog runs.");
    }

    #[test]
    fn test_example_keeps_loose_text_without_fallback() {
        let example = example_from(r#"<div class="japanese"> 犬 が <span>走る</span></div>"#);
        assert_eq!(example.source, vec![MarkupNode::text("犬 が")]);
    }

    #[test]
    fn test_example_without_translation_is_skipped() {
        let doc = Document::parse(r#"<div class="sentence"><div class="japanese">犬</div></div>"#).unwrap();
        assert!(extract_example(doc.select_first(".sentence").unwrap()).is_none());
    }

    #[test]
    fn test_split_forms() {
        assert_eq!(split_forms("犬、猫、鳥", '、'), vec!["犬", "猫", "鳥"]);
        assert_eq!(split_forms(" 犬 、、 猫 ", '、'), vec!["犬", "猫"]);
        assert!(split_forms("", '、').is_empty());
    }

    #[test]
    fn test_characters() {
        let characters = entry().characters;
        assert_eq!(characters.len(), 2);

        assert_eq!(characters[0].glyph, "読");
        assert_eq!(characters[0].meaning.as_deref(), Some("read"));
        assert_eq!(characters[0].kun_readings.as_deref(), Some("よ.む、 -よ.み"));
        assert_eq!(characters[0].on_readings.as_deref(), Some("ドク、 トク、 トウ"));

        assert_eq!(characters[1].glyph, "本");
        assert!(characters[1].kun_readings.is_none());
        assert!(characters[1].on_readings.is_none());
    }

    #[test]
    fn test_custom_filters() {
        let doc = Document::parse(ENTRY).unwrap();
        let config = ExtractConfig::builder().excluded_tag_markers(vec!["JLPT".to_string()]).build();
        let record = extract_word(&doc, &config).unwrap();
        assert_eq!(record.tags, vec!["Common word", "Wanikani level 5"]);
    }
}
