// ============================================================
// Layer 5: Relevance Scorer
// ============================================================
// Scores sentences against a topic string by plain substring
// occurrence:
//
//   score = 3 * occurrences(topic in sentence) + (1 if any)
//
// Matching is case-insensitive (both sides lowercased, topic
// trimmed). Sentences scoring 0 are dropped, so an empty topic
// selects nothing. Results are ordered by score, highest first;
// the sort is stable so equal scores keep reading order.

use crate::data::splitter::split_sentences;
use crate::domain::page::Page;
use crate::domain::study::Citation;

/// A sentence, the page it came from and its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub score:    u32,
    pub page:     u32,
    pub sentence: String,
}

impl From<ScoredSentence> for Citation {
    fn from(s: ScoredSentence) -> Self {
        Citation { page: s.page, sentence: s.sentence }
    }
}

/// Lowercase and trim a topic the way every scorer expects it.
pub fn normalize_topic(topic: &str) -> String {
    topic.to_lowercase().trim().to_string()
}

/// Score one sentence against an already-normalised topic.
pub fn score_sentence(sentence: &str, topic: &str) -> u32 {
    if topic.is_empty() {
        return 0;
    }
    let occurrences = sentence.to_lowercase().matches(topic).count() as u32;
    let present     = if occurrences > 0 { 1 } else { 0 };
    occurrences * 3 + present
}

/// Top `max_sentences` sentences of `text` that mention `topic`.
pub fn find_relevant_sentences(text: &str, topic: &str, max_sentences: usize) -> Vec<String> {
    let page = Page::new(0, text);
    find_relevant_in_pages(std::slice::from_ref(&page), topic, max_sentences)
        .into_iter()
        .map(|s| s.sentence)
        .collect()
}

/// Page-aware variant: scores every sentence of every page and
/// keeps the page number alongside each hit.
pub fn find_relevant_in_pages(pages: &[Page], topic: &str, max_sentences: usize) -> Vec<ScoredSentence> {
    let topic = normalize_topic(topic);
    if topic.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredSentence> = pages
        .iter()
        .flat_map(|page| {
            split_sentences(&page.text)
                .into_iter()
                .map(move |sentence| (page.page, sentence))
        })
        .filter_map(|(page, sentence)| {
            let score = score_sentence(&sentence, &topic);
            (score > 0).then_some(ScoredSentence { score, page, sentence })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_sentences);

    tracing::debug!("Topic '{}' matched {} sentences", topic, scored.len());
    scored
}

/// Reading-order fallback for a topic with no hits: the first
/// `per_page` sentences of each of the first `max_pages` pages,
/// capped at `limit` overall.
pub fn leading_sentences(pages: &[Page], max_pages: usize, per_page: usize, limit: usize) -> Vec<Citation> {
    pages
        .iter()
        .take(max_pages)
        .flat_map(|page| {
            split_sentences(&page.text)
                .into_iter()
                .take(per_page)
                .map(move |sentence| Citation { page: page.page, sentence })
        })
        .take(limit)
        .collect()
}
