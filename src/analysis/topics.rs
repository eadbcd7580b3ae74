// ============================================================
// Layer 5: Topic / Keyword Extractor
// ============================================================
// Counts content tokens and returns the most frequent ones.
//
// Ties are broken by the order in which words were first seen.
// HashMap iteration order is unspecified, so counts are kept in
// a Vec in first-seen order and sorted with a stable sort on
// count alone.
//
// Example:
//   "cells divide. cells grow. tissue forms."
//     → [("cells", 2), ("divide", 1), ("grow", 1), ...]

use std::collections::HashMap;

use crate::data::tokenizer::tokenize;
use crate::domain::study::TopicCount;

/// Count tokens, most frequent first, ties in first-seen order.
pub fn count_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<TopicCount> {
    let mut index:  HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TopicCount>      = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(TopicCount::new(token, 1));
            }
        }
    }

    // sort_by is stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most common tokens.
pub fn most_common<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<TopicCount> {
    let mut counts = count_tokens(tokens);
    counts.truncate(n);
    counts
}

/// Tokenize `text` and return its top `top_n` topic words.
pub fn extract_topics(text: &str, top_n: usize) -> Vec<TopicCount> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Vec::new();
    }
    most_common(&tokens, top_n)
}

/// Just the words of a topic list, in rank order.
pub fn words(topics: &[TopicCount]) -> Vec<String> {
    topics.iter().map(|t| t.word.clone()).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_no_topics() {
        assert!(extract_topics("", 10).is_empty());
        assert!(extract_topics("the and of it", 10).is_empty());
    }

    #[test]
    fn test_ranked_by_count_then_first_seen() {
        let topics = extract_topics("zebra apple mango apple zebra kiwi apple", 10);
        let got: Vec<(&str, usize)> = topics.iter().map(|t| (t.word.as_str(), t.count)).collect();
        assert_eq!(got, vec![("apple", 3), ("zebra", 2), ("mango", 1), ("kiwi", 1)]);
    }

    #[test]
    fn test_respects_top_n_and_distinct_count() {
        let text = "osmosis diffusion osmosis membrane gradient";
        assert_eq!(extract_topics(text, 2).len(), 2);
        assert_eq!(extract_topics(text, 50).len(), 4);
        assert!(extract_topics(text, 0).is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let topics = extract_topics(
            "enzyme substrate enzyme catalyst substrate enzyme product inhibitor inhibitor",
            10,
        );
        assert!(topics.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_words_keep_rank_order() {
        let topics = extract_topics("beta alpha beta", 5);
        assert_eq!(words(&topics), vec!["beta", "alpha"]);
    }
}
