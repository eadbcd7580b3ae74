// ============================================================
// Layer 4: Sentence and Paragraph Splitter
// ============================================================
// Splits normalised text into sentences with one rule:
//
//   a boundary is `.`, `!` or `?`, then whitespace, then an
//   uppercase ASCII letter or a digit.
//
// The punctuation stays with the sentence on the left and the
// whitespace between them is dropped. Abbreviations followed by
// a capital ("Dr. Smith") are over-split; that is accepted.
//
// Example:
//   "Hello world. This is ExamBuddy."
//     → ["Hello world.", "This is ExamBuddy."]
//
// Reference: regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::preprocessor::clean_text;

// Group 1 is the whitespace gap that gets cut out.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](\s+)[A-Z0-9]").unwrap());

/// Split text into an ordered list of trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = clean_text(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start     = 0usize;

    for caps in SENTENCE_BOUNDARY.captures_iter(&text) {
        if let Some(gap) = caps.get(1) {
            push_trimmed(&mut sentences, &text[start..gap.start()]);
            start = gap.end();
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Split text on blank lines into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = clean_text(text);
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
