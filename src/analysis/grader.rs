// ============================================================
// Layer 5: Answer Grader
// ============================================================
// Marks a free-text answer against a ranked list of expected
// keywords with a fixed three-part rubric:
//
//   Content   (0-60)  coverage of the expected keywords
//   Clarity   (0-25)  length, sentence count, connectives
//   Examples  (0-15)  an example cue, or a long answer
//
// Content coverage is measured against at most 10 keywords:
//
//   coverage = matches / min(10, expected.len())
//   content  = min(60, round(60 * coverage))
//
// Matches are counted over every expected keyword (up to 16),
// so keywords ranked below 10th can still lift the score but
// never raise the denominator. Rounding is half-to-even.
//
// score = min(100, content + clarity + examples)
//
// Example:
//   expected = ["osmosis", "water", "membrane", "gradient"]
//   answer   = "Osmosis moves water across a membrane."
//   content  = round(60 * 3/4) = 45
//   clarity  = 0   (6 words, 1 sentence, no connective)
//   examples = 0
//   score    = 45 → Fair

use crate::analysis::topics::{count_tokens, words};
use crate::data::tokenizer::{contains_word, tokenize};
use crate::domain::marking::{
    Band, MarkingResult, Rubric, CLARITY_MAX, CONTENT_MAX, EXAMPLES_MAX,
};
use crate::domain::study::TopicSheet;

/// Upper bound on expected keywords taken from a sheet.
pub const MAX_EXPECTED_KEYWORDS: usize = 16;

/// Coverage is measured against at most this many keywords.
const COVERAGE_TARGET: usize = 10;
const MAX_MISSING: usize = 8;
const MAX_FEEDBACK: usize = 4;

const CONNECTIVES: [&str; 5] = ["because", "therefore", "so", "but", "however"];

const EXAMPLE_CUES: [&str; 8] = [
    "for example",
    "e.g",
    "such as",
    "scenario",
    "case",
    "in practice",
    "real",
    "in court",
];

/// Ranked keywords a good answer on this sheet's topic should use:
/// the sheet's key terms first, then the summary's words, ranked by
/// frequency with first-seen tie-breaks, capped at `limit`.
pub fn extract_expected_keywords(sheet: &TopicSheet, limit: usize) -> Vec<String> {
    let mut tokens = tokenize(&sheet.key_terms.join(" "));
    tokens.extend(tokenize(&sheet.summary.join(" ")));

    let mut ranked = words(&count_tokens(&tokens));
    ranked.truncate(limit.min(MAX_EXPECTED_KEYWORDS));
    ranked
}

/// Lowercase, keep only [a-z0-9-' ] and whitespace, collapse runs.
pub fn normalize_answer(answer: &str) -> String {
    let kept: String = answer
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '\'' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Mark `answer` against the ranked `expected` keywords.
pub fn mark_answer<S: AsRef<str>>(answer: &str, expected: &[S]) -> MarkingResult {
    let expected: Vec<&str> = expected.iter().map(|k| k.as_ref()).collect();
    let clean = normalize_answer(answer);

    if clean.is_empty() {
        return MarkingResult {
            score:            0,
            band:             Band::NeedsWork,
            rubric:           Rubric::default(),
            found_keywords:   Vec::new(),
            missing_keywords: expected.iter().take(MAX_MISSING).map(|k| k.to_string()).collect(),
            feedback:         vec!["Write an answer first, then mark it.".to_string()],
        };
    }

    let raw_lower  = answer.to_lowercase();
    let word_count = clean.split_whitespace().count();

    // ── Content ──────────────────────────────────────────────────────────────
    let found: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|kw| contains_word(&clean, &kw.to_lowercase()))
        .collect();
    let content = content_score(found.len(), expected.len());

    // ── Clarity ──────────────────────────────────────────────────────────────
    let mut clarity = 0;
    if word_count >= 20 {
        clarity += 10;
    }
    if word_count >= 50 {
        clarity += 5;
    }
    if sentence_count(answer) >= 2 {
        clarity += 5;
    }
    if CONNECTIVES.iter().any(|c| contains_word(&clean, c)) {
        clarity += 5;
    }
    let clarity = clarity.min(CLARITY_MAX);

    // ── Examples ─────────────────────────────────────────────────────────────
    let examples = if EXAMPLE_CUES.iter().any(|cue| raw_lower.contains(cue)) {
        EXAMPLES_MAX
    } else if word_count >= 45 {
        8
    } else {
        0
    };

    let rubric = Rubric { content, clarity, examples };
    let score  = rubric.total().min(100);

    let missing: Vec<String> = expected
        .iter()
        .take(COVERAGE_TARGET)
        .filter(|kw| !found.contains(*kw))
        .take(MAX_MISSING)
        .map(|kw| kw.to_string())
        .collect();

    let feedback = feedback(&rubric, word_count, &missing);

    tracing::debug!(
        "Marked answer: {} words, {}/{} keywords, score {}",
        word_count,
        found.len(),
        expected.len(),
        score
    );

    MarkingResult {
        score,
        band: Band::from_score(score),
        rubric,
        found_keywords: found.into_iter().map(str::to_string).collect(),
        missing_keywords: missing,
        feedback,
    }
}

fn content_score(matches: usize, expected: usize) -> u32 {
    let target = expected.min(COVERAGE_TARGET);
    if target == 0 {
        return 0;
    }
    let coverage = matches as f64 / target as f64;
    let marks    = (f64::from(CONTENT_MAX) * coverage).round_ties_even();
    (marks as u32).min(CONTENT_MAX)
}

/// Non-empty pieces when the raw answer is split on `.`, `!` and `?`.
fn sentence_count(answer: &str) -> usize {
    answer
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn feedback(rubric: &Rubric, word_count: usize, missing: &[String]) -> Vec<String> {
    let mut tips = Vec::new();

    if rubric.content < 35 {
        if missing.is_empty() {
            tips.push("Use more of the key terms for this topic.".to_string());
        } else {
            let sample: Vec<&str> = missing.iter().take(5).map(String::as_str).collect();
            tips.push(format!("Use more of the key terms for this topic, such as: {}.", sample.join(", ")));
        }
    }
    if rubric.clarity < 15 {
        tips.push(
            "Write in full sentences and link your ideas with words like because, therefore or however."
                .to_string(),
        );
    }
    if rubric.examples < 8 {
        tips.push("Add a real-world example (start with \"For example, ...\").".to_string());
    }
    if word_count < 20 {
        tips.push("Your answer is quite short; aim for at least 3-4 sentences.".to_string());
    }

    if tips.is_empty() {
        tips.push("Good answer: clear, relevant and supported by an example. Keep it up.".to_string());
    }
    tips.truncate(MAX_FEEDBACK);
    tips
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_answer() {
        let expected: Vec<String> = (0..12).map(|i| format!("term{i}")).collect();
        let r = mark_answer("   ?!  ", &expected);
        assert_eq!(r.score, 0);
        assert_eq!(r.band, Band::NeedsWork);
        assert_eq!(r.rubric, Rubric::default());
        assert!(r.found_keywords.is_empty());
        assert_eq!(r.missing_keywords, expected[..8].to_vec());
        assert_eq!(r.feedback.len(), 1);
    }

    #[test]
    fn test_worked_example() {
        let r = mark_answer(
            "Osmosis moves water across a membrane.",
            &kws(&["osmosis", "water", "membrane", "gradient"]),
        );
        assert_eq!(r.rubric, Rubric { content: 45, clarity: 0, examples: 0 });
        assert_eq!(r.score, 45);
        assert_eq!(r.band, Band::Fair);
        assert_eq!(r.found_keywords, vec!["osmosis", "water", "membrane"]);
        assert_eq!(r.missing_keywords, vec!["gradient"]);
    }

    #[test]
    fn test_whole_word_matching() {
        let r = mark_answer("Cellular life.", &kws(&["cell"]));
        assert_eq!(r.rubric.content, 0);
    }

    #[test]
    fn test_denominator_is_capped_at_ten() {
        // 16 keywords, the answer uses 5 of them: 5/10, not 5/16
        let expected: Vec<String> = (0..16).map(|i| format!("kw{i}")).collect();
        let r = mark_answer("kw0 kw1 kw2 kw3 kw15", &expected);
        assert_eq!(r.rubric.content, 30);
        assert_eq!(r.found_keywords.len(), 5);
        // only the top 10 feed `missing`
        assert_eq!(r.missing_keywords, kws(&["kw4", "kw5", "kw6", "kw7", "kw8", "kw9"]));
    }

    #[test]
    fn test_missing_keywords_capped_at_eight() {
        let expected: Vec<String> = (0..12).map(|i| format!("kw{i}")).collect();
        let r = mark_answer("Only kw11 appears here.", &expected);
        assert_eq!(r.found_keywords, vec!["kw11"]);
        assert_eq!(r.missing_keywords, expected[..8].to_vec());
    }

    #[test]
    fn test_content_caps_at_sixty() {
        let expected: Vec<String> = (0..14).map(|i| format!("kw{i}")).collect();
        let answer = expected.join(" ");
        assert_eq!(mark_answer(&answer, &expected).rubric.content, 60);
    }

    #[test]
    fn test_content_rounds_half_to_even() {
        let expected: Vec<String> = (0..8).map(|i| format!("kw{i}")).collect();
        assert_eq!(content_score(1, 8), 8); // 7.5
        assert_eq!(content_score(3, 8), 22); // 22.5
        assert_eq!(content_score(5, 8), 38); // 37.5
        assert_eq!(mark_answer("kw0 kw1 kw2", &expected).rubric.content, 22);
    }

    #[test]
    fn test_no_expected_keywords_scores_no_content() {
        let r = mark_answer("Some answer here.", &Vec::<String>::new());
        assert_eq!(r.rubric.content, 0);
        assert!(r.missing_keywords.is_empty());
    }

    #[test]
    fn test_clarity_parts() {
        let twenty = "word ".repeat(20);
        assert_eq!(mark_answer(&twenty, &kws(&[])).rubric.clarity, 10);

        let fifty = "word ".repeat(50);
        assert_eq!(mark_answer(&fifty, &kws(&[])).rubric.clarity, 15);

        assert_eq!(mark_answer("One. Two.", &kws(&[])).rubric.clarity, 5);
        assert_eq!(mark_answer("It grows because light", &kws(&[])).rubric.clarity, 5);

        let full = format!("{fifty}. It grows because of light.");
        assert_eq!(mark_answer(&full, &kws(&[])).rubric.clarity, 25);
    }

    #[test]
    fn test_example_cues() {
        assert_eq!(mark_answer("For example, a plant.", &kws(&[])).rubric.examples, 15);
        assert_eq!(mark_answer("Plants, e.g. ferns.", &kws(&[])).rubric.examples, 15);
        assert_eq!(mark_answer("In a real lab.", &kws(&[])).rubric.examples, 15);

        let long = "word ".repeat(45);
        assert_eq!(mark_answer(&long, &kws(&[])).rubric.examples, 8);
        assert_eq!(mark_answer("Plain words.", &kws(&[])).rubric.examples, 0);
    }

    #[test]
    fn test_score_bounds_and_sum() {
        let expected: Vec<String> = (0..10).map(|i| format!("kw{i}")).collect();
        let answer = format!(
            "{} because it matters. For example, in practice. {}",
            expected.join(" "),
            "more ".repeat(60)
        );
        let r = mark_answer(&answer, &expected);
        assert_eq!(r.rubric, Rubric { content: 60, clarity: 25, examples: 15 });
        assert_eq!(r.score, 100);
        assert_eq!(r.band, Band::Excellent);
        assert_eq!(r.score, r.rubric.total().min(100));
        assert_eq!(r.feedback.len(), 1);
    }

    #[test]
    fn test_adding_a_keyword_never_lowers_content() {
        let expected = kws(&["enzyme", "substrate", "catalyst", "inhibitor", "active", "site"]);
        let base = "An enzyme binds its substrate.";
        let more = "An enzyme binds its substrate as a catalyst.";
        let a = mark_answer(base, &expected).rubric.content;
        let b = mark_answer(more, &expected).rubric.content;
        assert!(b >= a);
        assert!(b > a);
    }

    #[test]
    fn test_feedback_is_capped() {
        let r = mark_answer("short", &kws(&["alpha", "beta"]));
        assert!(r.feedback.len() <= 4);
        assert!(r.feedback[0].contains("alpha, beta"));
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  It's SEMI-permeable!!  (mostly) "), "it's semi-permeable mostly");
    }

    #[test]
    fn test_expected_keywords_rank_key_terms_first() {
        let sheet = TopicSheet {
            topic:     "osmosis".into(),
            key_terms: kws(&["osmosis", "water", "membrane"]),
            summary:   kws(&["Water moves by osmosis.", "Solutes stay behind."]),
            ..Default::default()
        };
        let expected = extract_expected_keywords(&sheet, 16);
        assert_eq!(expected, kws(&["osmosis", "water", "membrane", "moves", "solutes", "stay", "behind"]));
        assert_eq!(extract_expected_keywords(&sheet, 2), kws(&["osmosis", "water"]));
    }
}
