// ============================================================
// Layer 2: Topic Sheet Use Case
// ============================================================
// Builds the study sheet for one topic:
//
//   Step 1: Cap the input size
//   Step 2: Score every sentence of every page against the topic
//           (fallback: leading sentences of the first pages)
//   Step 3: Summarise the evidence, topic-weighted
//   Step 4: Simplify the summary
//   Step 5: Rank key terms of the evidence
//   Step 6: Exam prompts from topic + key terms
//   Step 7: Practice questions from a wider evidence pool
//
// The sheet is a pure function of (pages, topic, config).

use crate::analysis::{
    grader,
    questions::{cloze_keywords, exam_questions, practice_questions},
    relevance::{find_relevant_in_pages, leading_sentences},
    simplifier::simplify_sentences,
    summarizer::summarize,
    topics::{extract_topics, words},
};
use crate::application::bounded;
use crate::domain::page::Page;
use crate::domain::study::{Citation, TopicSheet};
use crate::infra::config::StudyConfig;

pub struct SheetUseCase {
    config: StudyConfig,
}

impl SheetUseCase {
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, pages: &[Page], topic: &str) -> TopicSheet {
        let cfg   = &self.config;
        let doc   = bounded(pages, cfg);
        let topic = topic.trim();

        // ── Step 2: Evidence sentences ────────────────────────────────────────
        let evidence = self.evidence(&doc.pages, topic, cfg.relevant_sentences);
        let key_sentences: Vec<String> = evidence.iter().map(|c| c.sentence.clone()).collect();
        let joined = key_sentences.join(" ");

        // ── Step 3 + 4: Summary and easy version ──────────────────────────────
        let summary            = summarize(&joined, topic, cfg.summary_sentences);
        let simple_explanation = simplify_sentences(&summary);

        // ── Step 5 + 6: Key terms and exam prompts ────────────────────────────
        let key_terms      = words(&extract_topics(&joined, cfg.key_terms));
        let exam_questions = exam_questions(topic, &key_terms);

        // ── Step 7: Practice questions ────────────────────────────────────────
        let pool: Vec<String> = self
            .evidence(&doc.pages, topic, cfg.practice_pool)
            .into_iter()
            .map(|c| c.sentence)
            .collect();
        let keywords           = cloze_keywords(&pool);
        let practice_questions = practice_questions(&pool, &keywords, topic, cfg.cloze_questions);

        let citations: Vec<Citation> = evidence.into_iter().take(cfg.citations).collect();

        tracing::info!(
            "Sheet for '{}': {} evidence sentences, {} summary lines, {} key terms",
            topic,
            key_sentences.len(),
            summary.len(),
            key_terms.len()
        );

        TopicSheet {
            topic: topic.to_string(),
            summary,
            simple_explanation,
            key_terms,
            exam_questions,
            practice_questions,
            citations,
        }
    }

    /// Expected keywords for marking answers on `sheet`.
    pub fn expected_keywords(&self, sheet: &TopicSheet) -> Vec<String> {
        grader::extract_expected_keywords(sheet, self.config.expected_keywords)
    }

    /// Topic hits in score order, or the document's leading sentences
    /// when the topic never appears.
    fn evidence(&self, pages: &[Page], topic: &str, limit: usize) -> Vec<Citation> {
        let hits = find_relevant_in_pages(pages, topic, limit);
        if !hits.is_empty() {
            return hits.into_iter().map(Citation::from).collect();
        }

        tracing::debug!("No sentence mentions '{}'; using leading sentences", topic);
        leading_sentences(
            pages,
            self.config.fallback_pages,
            self.config.fallback_sentences_per_page,
            limit,
        )
    }
}

/// Build a topic sheet with the default configuration.
pub fn build_topic_sheet(pages: &[Page], topic: &str) -> TopicSheet {
    SheetUseCase::new(StudyConfig::default()).execute(pages, topic)
}

/// At most 16 keywords an answer on this sheet's topic should use.
pub fn extract_expected_keywords(sheet: &TopicSheet) -> Vec<String> {
    SheetUseCase::new(StudyConfig::default()).expected_keywords(sheet)
}
