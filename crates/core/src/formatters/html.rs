use crate::markup::{RenderTarget, escape_html, render};
use crate::word::{CharacterEntry, SenseEntry, WordRecord};

/// Returned in place of a card when no entry was found.
pub const NO_WORD_MESSAGE: &str = "No word information found on this page.";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <style>
        body {
            font-family: 'Hiragino Kaku Gothic Pro', 'Meiryo', 'MS Gothic', sans-serif;
            line-height: 1.6;
            color: #333;
            padding: 10px;
            margin: 0;
        }
        .tags {
            margin-bottom: 10px;
            color: #666;
            font-size: 12px;
        }
        .reading-box {
            margin: 15px 0 20px 0;
            padding: 15px;
            background-color: #f0f8ff;
            border-left: 4px solid #47DB27;
            border-radius: 5px;
        }
        .kanji-text {
            font-size: 28px;
            margin-bottom: 8px;
            color: #333;
        }
        .furigana-text {
            font-size: 18px;
            color: #666;
        }
        .meaning-section {
            margin-top: 15px;
        }
        .part-of-speech {
            font-weight: bold;
            color: #47DB27;
            font-size: 12px;
        }
        .definition {
            margin: 5px 0;
        }
        .notes {
            margin: 5px 0;
            font-size: 12px;
            color: #888;
        }
        .examples {
            margin: 10px 0 10px 20px;
            font-style: italic;
            background-color: #f5f5f5;
            padding: 10px;
            border-radius: 5px;
        }
        .example-ja {
            margin: 5px 0;
            color: #333;
            font-size: 16px;
        }
        ruby {
            ruby-position: over;
        }
        rt {
            font-size: 0.6em;
            color: #666;
        }
        .example-en {
            margin: 5px 0 10px 0;
            color: #666;
            font-size: 13px;
        }
        .other-forms {
            margin-top: 15px;
        }
        .other-forms-label {
            font-weight: bold;
        }
        .kanji-breakdown {
            margin-top: 20px;
            border-top: 1px solid #ddd;
            padding-top: 15px;
        }
        .kanji-breakdown-title {
            font-weight: bold;
        }
        .kanji-item {
            margin: 10px 0;
            padding: 10px;
            background-color: #f9f9f9;
            border-left: 3px solid #47DB27;
        }
        .kanji-character {
            font-size: 24px;
            margin-bottom: 5px;
            color: #333;
        }
        .kanji-detail {
            margin: 5px 0;
            color: #555;
        }
    </style>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>";

/// Renders a word record as a standalone HTML card for Anki.
///
/// Sections without data are left out entirely.
pub fn render_word_document(record: Option<&WordRecord>) -> String {
    let Some(record) = record else {
        return NO_WORD_MESSAGE.to_string();
    };

    let mut out = String::from(HEAD);

    if !record.tags.is_empty() {
        let tags: Vec<String> = record.tags.iter().map(|tag| escape_html(tag)).collect();
        out.push_str(&format!("    <div class=\"tags\">{}</div>\n", tags.join(" • ")));
    }

    push_reading_box(&mut out, record);

    for sense in &record.senses {
        push_sense(&mut out, sense);
    }

    if !record.alternate_forms.is_empty() {
        let forms: Vec<String> = record.alternate_forms.iter().map(|form| escape_html(form)).collect();
        out.push_str(&format!(
            "    <div class=\"other-forms\"><span class=\"other-forms-label\">Other forms:</span> {}</div>\n",
            forms.join("、 ")
        ));
    }

    if !record.characters.is_empty() {
        out.push_str("    <div class=\"kanji-breakdown\">\n");
        out.push_str("        <div class=\"kanji-breakdown-title\">Kanji breakdown:</div>\n");
        record.characters.iter().for_each(|character| push_character(&mut out, character));
        out.push_str("    </div>\n");
    }

    out.push_str(FOOT);
    out
}

fn push_reading_box(out: &mut String, record: &WordRecord) {
    match (&record.kanji_form, &record.furigana_reading) {
        (Some(kanji), Some(furigana)) => {
            out.push_str("    <div class=\"reading-box\">\n");
            out.push_str(&format!("        <div class=\"kanji-text\">{}</div>\n", escape_html(kanji)));
            out.push_str(&format!("        <div class=\"furigana-text\">{}</div>\n", escape_html(furigana)));
            out.push_str("    </div>\n");
        }
        _ if !record.word.is_empty() => {
            out.push_str("    <div class=\"reading-box\">\n");
            out.push_str(&format!("        <div class=\"kanji-text\">{}</div>\n", escape_html(&record.word)));
            out.push_str("    </div>\n");
        }
        _ => {}
    }
}

fn push_sense(out: &mut String, sense: &SenseEntry) {
    out.push_str("    <div class=\"meaning-section\">\n");

    if let Some(pos) = &sense.part_of_speech {
        out.push_str(&format!("        <div class=\"part-of-speech\">{}</div>\n", escape_html(pos)));
    }

    out.push_str(&format!("        <div class=\"definition\">{}</div>\n", escape_html(&sense.definition)));

    if let Some(notes) = &sense.notes {
        out.push_str(&format!("        <div class=\"notes\">ℹ️ {}</div>\n", escape_html(notes)));
    }

    if !sense.examples.is_empty() {
        out.push_str("        <div class=\"examples\">\n");
        for example in &sense.examples {
            out.push_str(&format!(
                "            <div class=\"example-ja\">{}</div>\n",
                render(&example.source, RenderTarget::Html)
            ));
            out.push_str(&format!(
                "            <div class=\"example-en\">{}</div>\n",
                escape_html(&example.translation)
            ));
        }
        out.push_str("        </div>\n");
    }

    out.push_str("    </div>\n");
}

fn push_character(out: &mut String, character: &CharacterEntry) {
    out.push_str("        <div class=\"kanji-item\">\n");
    out.push_str(&format!(
        "            <div class=\"kanji-character\">{}</div>\n",
        escape_html(&character.glyph)
    ));

    let details = [("Meaning", &character.meaning), ("Kun", &character.kun_readings), ("On", &character.on_readings)];
    for (label, value) in details {
        if let Some(value) = value {
            out.push_str(&format!(
                "            <div class=\"kanji-detail\">{label}: {}</div>\n",
                escape_html(value)
            ));
        }
    }

    out.push_str("        </div>\n");
}
