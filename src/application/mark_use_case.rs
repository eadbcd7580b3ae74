// ============================================================
// Layer 2: Mark Use Case
// ============================================================
// Marks a typed answer for a topic:
//
//   Step 1: Build the topic sheet
//   Step 2: Derive the expected keywords from its key terms
//           and summary
//   Step 3: Run the rubric grader
//
// The question the student picked only matters to the caller;
// every question on a topic is marked against the same keywords.

use serde::{Deserialize, Serialize};

use crate::analysis::grader::mark_answer;
use crate::application::sheet_use_case::SheetUseCase;
use crate::domain::marking::MarkingResult;
use crate::domain::page::Page;
use crate::infra::config::StudyConfig;

/// Everything a caller needs to show a marked answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkOutcome {
    pub topic:             String,
    pub expected_keywords: Vec<String>,
    pub result:            MarkingResult,
}

pub struct MarkUseCase {
    sheets: SheetUseCase,
}

impl MarkUseCase {
    pub fn new(config: StudyConfig) -> Self {
        Self { sheets: SheetUseCase::new(config) }
    }

    pub fn execute(&self, pages: &[Page], topic: &str, answer: &str) -> MarkOutcome {
        let sheet    = self.sheets.execute(pages, topic);
        let expected = self.sheets.expected_keywords(&sheet);
        let result   = mark_answer(answer, &expected);

        tracing::info!(
            "Marked answer on '{}': {}/100 ({})",
            sheet.topic,
            result.score,
            result.band
        );

        MarkOutcome {
            topic:             sheet.topic,
            expected_keywords: expected,
            result,
        }
    }
}

/// Mark an answer with the default configuration.
pub fn mark_answer_on_topic(pages: &[Page], topic: &str, answer: &str) -> MarkOutcome {
    MarkUseCase::new(StudyConfig::default()).execute(pages, topic, answer)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marking::Band;

    fn pages() -> Vec<Page> {
        vec![Page::new(
            1,
            "Osmosis moves water across a membrane. Osmosis follows a concentration gradient. \
             Osmosis keeps plant cells firm.",
        )]
    }

    #[test]
    fn test_good_answer_scores_higher_than_weak_one() {
        let strong = mark_answer_on_topic(
            &pages(),
            "osmosis",
            "Osmosis moves water across a membrane because of a concentration gradient. \
             For example, plant cells stay firm when water enters them by osmosis.",
        );
        let weak = mark_answer_on_topic(&pages(), "osmosis", "It is about stuff.");

        assert!(strong.result.score > weak.result.score);
        assert_eq!(strong.expected_keywords[0], "osmosis");
        assert!(strong.result.found_keywords.contains(&"membrane".to_string()));
        assert_eq!(weak.result.band, Band::NeedsWork);
    }

    #[test]
    fn test_blank_answer() {
        let outcome = mark_answer_on_topic(&pages(), "osmosis", "  ");
        assert_eq!(outcome.result.score, 0);
        assert_eq!(outcome.result.band, Band::NeedsWork);
        assert_eq!(outcome.result.missing_keywords.len(), outcome.expected_keywords.len().min(8));
    }
}
