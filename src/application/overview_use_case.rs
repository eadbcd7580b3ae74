// ============================================================
// Layer 2: Overview Use Case
// ============================================================
// Builds the "what is this document about" view:
//
//   Step 1: Cap the input size
//   Step 2: Summarise the whole text (no topic) and simplify it
//   Step 3: Detect headings page by page
//   Step 4: Rank the document's key terms
//
// Also serves the topic suggestions a caller can offer before
// the user picks a topic.

use crate::analysis::{
    headings::detect_headings,
    simplifier::simplify_sentences,
    summarizer::summarize,
    topics::{extract_topics, words},
};
use crate::application::bounded;
use crate::domain::page::Page;
use crate::domain::study::{DocumentOverview, TopicCount};
use crate::infra::config::StudyConfig;

pub struct OverviewUseCase {
    config: StudyConfig,
}

impl OverviewUseCase {
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, pages: &[Page]) -> DocumentOverview {
        let cfg  = &self.config;
        let doc  = bounded(pages, cfg);
        let text = doc.full_text();

        let what_it_is = simplify_sentences(&summarize(&text, "", cfg.overview_sentences));
        let headings   = detect_headings(&doc.pages);
        let key_terms  = words(&extract_topics(&text, cfg.overview_key_terms));

        tracing::info!(
            "Overview built: {} pages, {} headings, {} key terms",
            doc.pages.len(),
            headings.len(),
            key_terms.len()
        );

        DocumentOverview { what_it_is, headings, key_terms }
    }

    /// Ranked topic suggestions with their counts.
    pub fn suggest_topics(&self, pages: &[Page]) -> Vec<TopicCount> {
        let doc = bounded(pages, &self.config);
        extract_topics(&doc.full_text(), self.config.suggested_topics)
    }
}

/// Build an overview with the default configuration.
pub fn build_overview(pages: &[Page]) -> DocumentOverview {
    OverviewUseCase::new(StudyConfig::default()).execute(pages)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::study::Heading;

    fn pages() -> Vec<Page> {
        vec![
            Page::new(1, "INTRODUCTION\nCells are the basic unit of life. Cells divide to grow. \
                          However, cells also die."),
            Page::new(2, "Cell Division\nMitosis produces two identical cells. \
                          Meiosis produces gametes."),
        ]
    }

    #[test]
    fn test_overview_sections() {
        let overview = build_overview(&pages());

        assert!(!overview.what_it_is.is_empty());
        assert!(overview.what_it_is.len() <= 6);
        assert_eq!(
            overview.headings,
            vec![
                Heading { heading: "INTRODUCTION".into(), page: 1 },
                Heading { heading: "Cell Division".into(), page: 2 },
            ]
        );
        assert_eq!(overview.key_terms[0], "cells");
    }

    #[test]
    fn test_what_it_is_is_simplified() {
        let overview = build_overview(&pages());
        assert!(overview.what_it_is.iter().all(|s| !s.contains("However")));
    }

    #[test]
    fn test_headings_are_read_from_normalised_text() {
        let raw = vec![
            Page::new(1, "CELL \t  BIOLOGY\nCells are small.\0"),
            Page::new(2, "CELL BIOLOGY\nThe cells divide by mitosis."),
        ];
        let overview = build_overview(&raw);
        assert_eq!(
            overview.headings,
            vec![Heading { heading: "CELL BIOLOGY".into(), page: 1 }]
        );
    }

    #[test]
    fn test_empty_document() {
        let overview = build_overview(&[]);
        assert_eq!(overview, DocumentOverview::default());
    }

    #[test]
    fn test_suggest_topics_respects_config() {
        let cfg = StudyConfig { suggested_topics: 2, ..StudyConfig::default() };
        let topics = OverviewUseCase::new(cfg).suggest_topics(&pages());
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].word, "cells");
    }
}
