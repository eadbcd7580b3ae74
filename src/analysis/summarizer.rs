// ============================================================
// Layer 5: Extractive Summarizer
// ============================================================
// Picks the most representative sentences of a text without
// generating any new wording.
//
//   1. Token weights: weight(w) = freq(w) / max_freq, in (0, 1]
//   2. Sentence score: sum of its token weights / sqrt(token count)
//      (the sqrt keeps long sentences from winning on volume)
//   3. Sentences mentioning the topic get a x1.25 bonus
//   4. Keep the top K by score, then put them back in reading
//      order so the summary reads like the source
//
// Sentences with no content tokens are never selected. If the
// whole text has no content tokens the first K sentences are
// returned as they are.

use std::collections::HashMap;

use crate::analysis::relevance::normalize_topic;
use crate::data::splitter::split_sentences;
use crate::data::tokenizer::tokenize;

const TOPIC_BONUS: f64 = 1.25;

/// Summarise `text` into at most `max_sentences` sentences.
pub fn summarize(text: &str, topic: &str, max_sentences: usize) -> Vec<String> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let weights = token_weights(&tokenize(text));
    if weights.is_empty() {
        return sentences.into_iter().take(max_sentences).collect();
    }

    let topic = normalize_topic(topic);

    // (score, original index)
    let mut scored: Vec<(f64, usize)> = sentences
        .iter()
        .enumerate()
        .filter_map(|(i, sentence)| {
            score_sentence(sentence, &weights, &topic).map(|score| (score, i))
        })
        .collect();

    // Stable: equal scores keep reading order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(max_sentences);
    scored.sort_by_key(|&(_, i)| i);

    scored
        .into_iter()
        .map(|(_, i)| sentences[i].clone())
        .collect()
}

/// freq / max_freq for every distinct token.
fn token_weights(tokens: &[String]) -> HashMap<String, f64> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for t in tokens {
        *freq.entry(t.as_str()).or_insert(0) += 1;
    }

    let max_f = freq.values().copied().max().unwrap_or(0);
    if max_f == 0 {
        return HashMap::new();
    }

    freq.into_iter()
        .map(|(w, f)| (w.to_string(), f as f64 / max_f as f64))
        .collect()
}

/// None when the sentence has no content tokens.
fn score_sentence(sentence: &str, weights: &HashMap<String, f64>, topic: &str) -> Option<f64> {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return None;
    }

    let total: f64 = tokens
        .iter()
        .map(|t| weights.get(t).copied().unwrap_or(0.0))
        .sum();
    let mut score = total / (tokens.len() as f64).sqrt();

    if !topic.is_empty() && sentence.to_lowercase().contains(topic) {
        score *= TOPIC_BONUS;
    }
    Some(score)
}
