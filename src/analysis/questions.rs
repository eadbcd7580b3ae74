// ============================================================
// Layer 5: Question Generator
// ============================================================
// Two kinds of output:
//
//   Practice  Cloze (fill-in-the-blank) items cut from evidence
//             sentences, plus two short "define / give an
//             example" prompts when a topic is known.
//
//   Exam      One prompt per question family, parameterised by
//             the topic and its top key terms:
//               Definition, Enumeration, Application,
//               Scenario, Comparison, Synthesis
//
// Cloze rule:
//   1. The first keyword (longer than 3 chars) found in the
//      sentence, case-insensitively, has its first occurrence
//      replaced by the blank marker.
//   2. Otherwise the middle word of 5+ letters is blanked.
//   3. Otherwise the sentence is returned unchanged.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::analysis::topics::{most_common, words};
use crate::data::tokenizer::tokenize;
use crate::domain::study::{ExamQuestion, PracticeKind, PracticeQuestion, QuestionKind};

pub const BLANK: &str = "_____";

/// Size of the keyword pool cloze items draw from.
pub const CLOZE_KEYWORDS: usize = 12;

const SYNTHESIS_TERMS: usize = 4;
const ENUMERATION_TERMS: usize = 3;

static MEDIUM_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{5,}\b").unwrap());

/// Blank out one key term of `sentence`.
pub fn make_cloze<S: AsRef<str>>(sentence: &str, keywords: &[S]) -> String {
    let lower = sentence.to_lowercase();

    for kw in keywords {
        let kw = kw.as_ref();
        if kw.chars().count() > 3 && lower.contains(&kw.to_lowercase()) {
            let pattern = format!("(?i){}", regex::escape(kw));
            if let Ok(re) = Regex::new(&pattern) {
                return re.replacen(sentence, 1, NoExpand(BLANK)).into_owned();
            }
        }
    }

    let candidates: Vec<&str> = MEDIUM_WORD.find_iter(sentence).map(|m| m.as_str()).collect();
    if let Some(word) = candidates.get(candidates.len() / 2) {
        return sentence.replacen(word, BLANK, 1);
    }

    sentence.to_string()
}

/// Most frequent tokens of the evidence pool, used as cloze targets.
pub fn cloze_keywords(pool: &[String]) -> Vec<String> {
    words(&most_common(&tokenize(&pool.join(" ")), CLOZE_KEYWORDS))
}

/// Cloze items for the first `n` pool sentences, then the two short
/// prompts when `topic` is non-empty.
pub fn practice_questions(pool: &[String], keywords: &[String], topic: &str, n: usize) -> Vec<PracticeQuestion> {
    let topic = topic.trim();
    let hint = if topic.is_empty() {
        "Look for the missing key term.".to_string()
    } else {
        format!("Look for a key term related to: {topic}")
    };

    let mut questions: Vec<PracticeQuestion> = pool
        .iter()
        .take(n)
        .map(|sentence| PracticeQuestion {
            kind:        PracticeKind::Cloze,
            question:    make_cloze(sentence, keywords),
            answer_hint: hint.clone(),
        })
        .collect();

    if !topic.is_empty() {
        questions.push(PracticeQuestion {
            kind:        PracticeKind::Short,
            question:    format!("Define '{topic}' in your own words."),
            answer_hint: "Use 1-3 sentences.".to_string(),
        });
        questions.push(PracticeQuestion {
            kind:        PracticeKind::Short,
            question:    format!("Give 1 real-life example of '{topic}'."),
            answer_hint: "Make it practical.".to_string(),
        });
    }

    questions
}

/// One exam prompt per question family.
pub fn exam_questions(topic: &str, key_terms: &[String]) -> Vec<ExamQuestion> {
    let topic = topic.trim();
    let subject = if topic.is_empty() { "the main topic" } else { topic };
    let topic_lower = topic.to_lowercase();

    // Key terms other than the topic itself
    let related: Vec<&str> = key_terms
        .iter()
        .map(String::as_str)
        .filter(|t| t.to_lowercase() != topic_lower)
        .collect();

    let enumeration = match related.len() {
        0 => format!("List and briefly describe the key components of {subject}."),
        _ => format!(
            "List and briefly describe the key components of {subject} (for example: {}).",
            related.iter().take(ENUMERATION_TERMS).copied().collect::<Vec<_>>().join(", ")
        ),
    };

    let comparison = match related.first() {
        Some(other) => format!("Compare and contrast {subject} with {other}. How are they similar and how do they differ?"),
        None => format!("Compare and contrast {subject} with a closely related idea. How are they similar and how do they differ?"),
    };

    let synthesis = match related.len() {
        0 => format!("Write a short answer that explains {subject} in your own words."),
        _ => {
            let terms: Vec<&str> = related.iter().take(SYNTHESIS_TERMS).copied().collect();
            format!(
                "Write a short answer on {subject} that correctly uses these {} key terms: {}.",
                terms.len(),
                terms.join(", ")
            )
        }
    };

    vec![
        ExamQuestion {
            kind:   QuestionKind::Definition,
            prompt: format!("Define {subject} and explain its main purpose."),
        },
        ExamQuestion { kind: QuestionKind::Enumeration, prompt: enumeration },
        ExamQuestion {
            kind:   QuestionKind::Application,
            prompt: format!("Explain why {subject} is important in real-world situations."),
        },
        ExamQuestion {
            kind:   QuestionKind::Scenario,
            prompt: format!("Describe a practical scenario where {subject} applies, and explain what happens."),
        },
        ExamQuestion { kind: QuestionKind::Comparison, prompt: comparison },
        ExamQuestion { kind: QuestionKind::Synthesis, prompt: synthesis },
    ]
}
