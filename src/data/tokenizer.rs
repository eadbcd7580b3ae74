// ============================================================
// Layer 4: Word Tokenizer
// ============================================================
// Turns text into the lowercase content words every frequency
// based step works on (topics, summaries, keyword pools).
//
//   1. Lowercase the text
//   2. Take maximal runs of a letter followed by letters,
//      hyphens or apostrophes (2+ chars)
//   3. Drop stopwords and anything of length <= 2
//
// Order and duplicates are kept; counting happens downstream.
//
// Example:
//   "The cell's membrane is semi-permeable."
//     → ["cell's", "membrane", "semi-permeable"]

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z][a-z\-']+").unwrap());

/// Common English function words ignored by every frequency count.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "a an the and or but if then so because as at by for from into on onto in out up down \
     over under again further to of with without within between among during before after \
     above below is are was were be been being this that these those it its they them their \
     you your we our i me my he she his her can could should would may might will just not \
     no yes"
        .split_whitespace()
        .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Extract content tokens from text, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| t.len() > 2 && !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Whole-word substring test.
/// Returns `true` only when `word` appears in `text` surrounded by
/// non-alphanumeric characters (or at string boundaries).
/// Prevents short terms like "cell" from matching inside "cellular".
pub fn contains_word(text: &str, word: &str) -> bool {
    let tb = text.as_bytes();
    let wb = word.as_bytes();
    let wl = wb.len();
    if wl == 0 || wl > tb.len() { return false; }
    for i in 0..=(tb.len() - wl) {
        if &tb[i..i + wl] == wb {
            let before_ok = i == 0 || !is_word_byte(tb[i - 1]);
            let after_ok  = i + wl == tb.len() || !is_word_byte(tb[i + wl]);
            if before_ok && after_ok { return true; }
        }
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
