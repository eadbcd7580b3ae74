// ============================================================
// Layer 5: Heading Detector
// ============================================================
// Textbook and exam headings are short lines with distinctive
// casing near the top of a page. Only the first 20 non-blank
// lines of each page are inspected.
//
// A line is a heading candidate when:
//   - it is at most 60 characters
//   - it contains at least one letter (so bare page numbers and
//     "1.2.3" style numbering never qualify)
//   - it is ALL UPPERCASE and at least 6 characters long, OR at
//     least half of its words start with a capital letter
//
// Headings are de-duplicated case-insensitively across pages
// (first occurrence wins), ordered by page and capped at 25.

use std::collections::HashSet;

use crate::domain::page::Page;
use crate::domain::study::Heading;

const LINES_PER_PAGE: usize = 20;
const MAX_HEADING_CHARS: usize = 60;
const MIN_UPPERCASE_CHARS: usize = 6;
const MAX_HEADINGS: usize = 25;

/// Detect section headings across all pages.
pub fn detect_headings(pages: &[Page]) -> Vec<Heading> {
    let mut seen     = HashSet::new();
    let mut headings = Vec::new();

    for page in pages {
        let lines = page
            .text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .take(LINES_PER_PAGE);

        for line in lines {
            if is_heading(line) && seen.insert(line.to_lowercase()) {
                headings.push(Heading {
                    heading: line.to_string(),
                    page:    page.page,
                });
            }
        }
    }

    headings.sort_by_key(|h| h.page);
    headings.truncate(MAX_HEADINGS);

    tracing::debug!("Detected {} headings over {} pages", headings.len(), pages.len());
    headings
}

/// Heading heuristic for a single trimmed line.
pub fn is_heading(line: &str) -> bool {
    let len = line.chars().count();
    if len == 0 || len > MAX_HEADING_CHARS {
        return false;
    }
    if !line.chars().any(char::is_alphabetic) {
        return false;
    }

    // at least one cased letter, and none of them lowercase
    let all_upper = line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase);
    if all_upper && len >= MIN_UPPERCASE_CHARS {
        return true;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let capitalised = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    capitalised * 2 >= words.len()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_first_line_is_heading() {
        let pages = vec![Page::new(4, "INTRODUCTION\nthis chapter covers the basics of cells.")];
        let headings = detect_headings(&pages);
        assert_eq!(
            headings,
            vec![Heading { heading: "INTRODUCTION".into(), page: 4 }]
        );
    }

    #[test]
    fn test_title_case_line_is_heading() {
        assert!(is_heading("Cell Structure and Function"));
        assert!(!is_heading("the cell is the basic unit of life"));
    }

    #[test]
    fn test_rejects_numbers_and_long_lines() {
        assert!(!is_heading("12"));
        assert!(!is_heading("1.2.3"));
        assert!(!is_heading(&"A".repeat(61)));
        // under 6 chars, but a single capitalised word still passes
        assert!(is_heading("DNA"));
        assert!(!is_heading("dna rna"));
    }

    #[test]
    fn test_uncased_script_is_not_all_caps() {
        assert!(!is_heading("細胞生物学の基礎"));
        assert!(is_heading("DNA 複製"));
    }

    #[test]
    fn test_dedup_is_case_insensitive_and_first_wins() {
        let pages = vec![
            Page::new(1, "Photosynthesis Basics\nbody text here."),
            Page::new(2, "PHOTOSYNTHESIS BASICS\nmore body text."),
        ];
        let headings = detect_headings(&pages);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].heading, "Photosynthesis Basics");
        assert_eq!(headings[0].page, 1);
    }

    #[test]
    fn test_sorted_by_page() {
        let pages = vec![
            Page::new(5, "LATER SECTION"),
            Page::new(2, "EARLIER SECTION"),
        ];
        let pages_out: Vec<u32> = detect_headings(&pages).iter().map(|h| h.page).collect();
        assert_eq!(pages_out, vec![2, 5]);
    }

    #[test]
    fn test_only_first_twenty_lines_scanned() {
        let mut text = String::new();
        for _ in 0..20 {
            text.push_str("plain body sentence here.\n\n");
        }
        text.push_str("HIDDEN HEADING\n");
        assert!(detect_headings(&[Page::new(1, text)]).is_empty());
    }

    #[test]
    fn test_capped_at_twenty_five() {
        let pages: Vec<Page> = (0..30)
            .map(|i| Page::new(i, format!("SECTION NUMBER {i}")))
            .collect();
        assert_eq!(detect_headings(&pages).len(), 25);
    }
}
