// ============================================================
// Layer 5: Simplifier
// ============================================================
// A rule-based "easy version" of each summary sentence.
//
// Word swaps (case-insensitive, whole word, applied in order):
//   therefore     → so
//   however       → but
//   in addition   → also
//   approximately → about
//   utilize       → use
//
// Sentences longer than 180 characters also have their first
// ", which " / ", that " clause break turned into ". ".
//
// No attempt is made to keep the output grammatical.

use once_cell::sync::Lazy;
use regex::Regex;

const LONG_SENTENCE_CHARS: usize = 180;

static SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\btherefore\b", "so"),
        (r"(?i)\bhowever\b", "but"),
        (r"(?i)\bin addition\b", "also"),
        (r"(?i)\bapproximately\b", "about"),
        (r"(?i)\butilize\b", "use"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

static CLAUSE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i),\s+(which|that)\s+").unwrap());

/// Simplify one sentence.
pub fn simplify_sentence(sentence: &str) -> String {
    let mut out = sentence.to_string();

    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }

    if out.chars().count() > LONG_SENTENCE_CHARS {
        out = CLAUSE_BREAK.replacen(&out, 1, ". ").into_owned();
    }

    out.trim().to_string()
}

/// Simplify each sentence independently.
pub fn simplify_sentences(sentences: &[String]) -> Vec<String> {
    sentences.iter().map(|s| simplify_sentence(s)).collect()
}
