// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Each use case wires the analysis layer into one of the
// operations a caller actually asks for:
//
//   overview_use_case  - what is this document about?
//   sheet_use_case     - study sheet for one topic
//   mark_use_case      - mark an answer on a topic
//
// Use cases own a StudyConfig, apply the input-size cap and log
// milestones. They never print; that's Layer 1.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

pub mod overview_use_case;
pub mod sheet_use_case;
pub mod mark_use_case;

pub use mark_use_case::{mark_answer_on_topic, MarkOutcome, MarkUseCase};
pub use overview_use_case::{build_overview, OverviewUseCase};
pub use sheet_use_case::{build_topic_sheet, extract_expected_keywords, SheetUseCase};

use crate::data::preprocessor::clean_text;
use crate::domain::page::{Document, Page};
use crate::infra::config::StudyConfig;

/// Normalise the pages into a Document trimmed to the configured cap.
fn bounded(pages: &[Page], cfg: &StudyConfig) -> Document {
    let doc: Document = pages
        .iter()
        .map(|p| Page::new(p.page, clean_text(&p.text)))
        .collect::<Vec<_>>()
        .into();
    let total = doc.char_count();
    if total > cfg.max_text_chars {
        tracing::warn!(
            "Large input ({} chars); analysing only the first {}",
            total,
            cfg.max_text_chars
        );
    }
    doc.capped(cfg.max_text_chars)
}
