// ============================================================
// Layer 3: Page and Document Domain Types
// ============================================================
// A Page is the unit handed to us by whatever extracted the
// text (a PDF reader, OCR, a .docx parser). Page number 0 marks
// a source with no pagination, such as an OCR'd photo.
//
// A Document is just the ordered pages of everything the user
// supplied. Nothing here decodes files.

use serde::{Deserialize, Serialize};

/// One page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number, or 0 for non-paginated sources
    pub page: u32,

    /// The extracted text of the page
    pub text: String,
}

impl Page {
    /// Create a new Page.
    ///
    /// Example:
    ///   let p = Page::new(3, "Photosynthesis converts light...");
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// An ordered sequence of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.text.trim().is_empty())
    }

    /// Total number of characters across all pages
    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }

    /// All page texts joined with blank lines, in page order.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Keep pages in order until `max_chars` characters have been used.
    /// The page that crosses the limit is cut at a char boundary;
    /// pages after it are dropped.
    pub fn capped(self, max_chars: usize) -> Self {
        let mut budget = max_chars;
        let mut pages  = Vec::with_capacity(self.pages.len());

        for page in self.pages {
            if budget == 0 {
                break;
            }
            let len = page.text.chars().count();
            if len <= budget {
                budget -= len;
                pages.push(page);
            } else {
                let text: String = page.text.chars().take(budget).collect();
                tracing::debug!(
                    "Input cap reached on page {} ({} of {} chars kept)",
                    page.page,
                    budget,
                    len
                );
                pages.push(Page::new(page.page, text));
                budget = 0;
            }
        }

        Self { pages }
    }
}

impl From<Vec<Page>> for Document {
    fn from(pages: Vec<Page>) -> Self {
        Self::new(pages)
    }
}
