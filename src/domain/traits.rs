// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The analysis pipeline never opens files. Anything that can
// produce extracted pages implements PageSource, and the
// application layer only ever sees the trait.
//
// Implementations:
//   - PageLoader  -> .txt / .json / .docx files on disk
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::page::{Document, Page};

// ─── PageSource ───────────────────────────────────────────────────────────────
/// Any component that can supply extracted page text.
pub trait PageSource {
    /// Load every available page, in reading order.
    fn load_pages(&self) -> Result<Vec<Page>>;

    /// Load the pages wrapped as a Document.
    fn load_document(&self) -> Result<Document> {
        Ok(Document::new(self.load_pages()?))
    }
}
