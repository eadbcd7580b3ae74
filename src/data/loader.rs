// ============================================================
// Layer 4: Page Loader
// ============================================================
// Reads already-extracted study material from disk and turns it
// into numbered pages. Decoding PDFs or running OCR happens
// upstream; this loader only understands text-shaped inputs:
//
//   .txt   Plain text. A form feed (\x0c) separates pages, which
//          is what `pdftotext` writes. Pages are numbered 1.. per
//          file. A file without form feeds is a single page 1.
//
//   .json  An array of {"page": n, "text": "..."} objects, for
//          callers that already have page-aware extraction.
//
//   .docx  Parsed with docx-rs. Paragraph text is joined with
//          newlines into one page numbered 0 (a .docx carries no
//          fixed pagination).
//
// The loader accepts either a single file or a directory. In a
// directory, entries are visited in name order and files that
// fail to parse are skipped with a warning.
//
// The .docx tree walked here looks like:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use docx_rs::read_docx;

use crate::data::preprocessor::clean_text;
use crate::domain::page::Page;
use crate::domain::traits::PageSource;

const PAGE_BREAK: char = '\u{000C}';

/// Loads pages from a file or a directory of files.
pub struct PageLoader {
    path: PathBuf,
}

impl PageLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for PageLoader {
    fn load_pages(&self) -> Result<Vec<Page>> {
        let path = self.path.as_path();

        if path.is_file() {
            let pages = load_file(path)?;
            tracing::info!("Loaded {} pages from '{}'", pages.len(), path.display());
            return Ok(pages);
        }

        if !path.is_dir() {
            bail!("Input path '{}' does not exist", path.display());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(path)
            .with_context(|| format!("Cannot read directory '{}'", path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_supported(p))
            .collect();
        entries.sort();

        let mut pages = Vec::new();
        for file in &entries {
            match load_file(file) {
                Ok(mut loaded) => {
                    tracing::debug!("Loaded: {} ({} pages)", file.display(), loaded.len());
                    pages.append(&mut loaded);
                }
                // Log a warning but continue, one bad file should not sink the rest
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", file.display(), e);
                }
            }
        }

        tracing::info!(
            "Loaded {} pages from {} files in '{}'",
            pages.len(),
            entries.len(),
            path.display()
        );
        Ok(pages)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn is_supported(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("txt" | "json" | "docx"))
}

/// Load one file, dispatching on its extension.
fn load_file(path: &Path) -> Result<Vec<Page>> {
    match extension(path).as_deref() {
        Some("txt")  => load_text(path),
        Some("json") => load_json(path),
        Some("docx") => load_docx(path),
        _ => bail!("Unsupported file type '{}' (expected .txt, .json or .docx)", path.display()),
    }
}

fn load_text(path: &Path) -> Result<Vec<Page>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    Ok(pages_from_text(&raw))
}

/// Split form-feed separated text into numbered, cleaned pages.
/// Blank pages keep their number slot but are not returned.
pub fn pages_from_text(raw: &str) -> Vec<Page> {
    raw.split(PAGE_BREAK)
        .enumerate()
        .filter_map(|(i, chunk)| {
            let text = clean_text(chunk);
            (!text.is_empty()).then(|| Page::new(i as u32 + 1, text))
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Page>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    let pages: Vec<Page> = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a JSON array of {{page, text}} objects", path.display()))?;

    Ok(pages
        .into_iter()
        .map(|p| Page::new(p.page, clean_text(&p.text)))
        .filter(|p| !p.text.is_empty())
        .collect())
}

fn load_docx(path: &Path) -> Result<Vec<Page>> {
    // Read the raw bytes of the .docx file (which is a ZIP)
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Only paragraphs carry running text; tables and images are skipped
        if let DocumentChild::Paragraph(para) = child {
            let para_text = extract_paragraph_text(para);
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    let text = clean_text(&paragraphs.join("\n"));
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![Page::new(0, text)])
}

/// Concatenate the text runs of one paragraph.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_form_feed_splits_pages() {
        let pages = pages_from_text("INTRODUCTION\nCells are small.\x0c\x0cCHAPTER TWO\nMore   text.");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page, 1);
        assert_eq!(pages[1].page, 3);
        assert_eq!(pages[1].text, "CHAPTER TWO\nMore text.");
    }

    #[test]
    fn test_text_without_form_feed_is_page_one() {
        let pages = pages_from_text("Just one page.");
        assert_eq!(pages, vec![Page::new(1, "Just one page.")]);
    }

    #[test]
    fn test_loads_json_pages() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, r#"[{"page": 2, "text": "Osmosis  moves water."}, {"page": 3, "text": "  "}]"#).unwrap();

        let pages = PageLoader::new(&path).load_pages().unwrap();
        assert_eq!(pages, vec![Page::new(2, "Osmosis moves water.")]);
    }

    #[test]
    fn test_directory_is_read_in_name_order_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "Second file.").unwrap();
        fs::write(dir.path().join("a.txt"), "First file.").unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let pages = PageLoader::new(dir.path()).load_pages().unwrap();
        let texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["First file.", "Second file."]);
    }

    #[test]
    fn test_docx_loads_as_one_unpaginated_page() {
        use docx_rs::{Docx, Paragraph, Run};

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        let file = fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Cell Biology")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Cells  divide "))
                    .add_run(Run::new().add_text("to grow.")),
            )
            .build()
            .pack(file)
            .unwrap();

        let pages = PageLoader::new(&path).load_pages().unwrap();
        assert_eq!(pages, vec![Page::new(0, "Cell Biology\nCells divide to grow.")]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PageLoader::new(dir.path().join("nope")).load_pages().is_err());
    }

    #[test]
    fn test_unsupported_single_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# heading").unwrap();
        assert!(PageLoader::new(&path).load_pages().is_err());
    }
}
