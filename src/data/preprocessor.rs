// ============================================================
// Layer 4: Text Normalizer
// ============================================================
// Cleans page text extracted upstream (PDF reader, OCR, .docx)
// before it is split into sentences or tokens.
//
// Cleaning steps (applied in order):
//   1. Replace NUL bytes with a plain space
//   2. Collapse every run of spaces/tabs into one space
//   3. Collapse 3+ consecutive newlines into exactly two
//   4. Trim leading/trailing whitespace
//
// Single newlines and paragraph breaks (\n\n) are kept so the
// heading detector can still see line structure.
//
// The function is idempotent: clean_text(clean_text(x)) == clean_text(x)
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Normalise raw extracted text. Empty input gives an empty string.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // ── Step 1 + 2: NUL → space, collapse horizontal whitespace ──────────────
    let mut step1      = String::with_capacity(text.len());
    let mut last_space = false;

    for c in text.chars() {
        let c = if c == '\0' { ' ' } else { c };
        if c == ' ' || c == '\t' {
            if !last_space {
                step1.push(' ');
            }
            last_space = true;
        } else {
            step1.push(c);
            last_space = false;
        }
    }

    // ── Step 3: Collapse excessive blank lines ────────────────────────────────
    let mut result        = String::with_capacity(step1.len());
    let mut newline_count = 0usize;

    for c in step1.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    result.trim().to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces_and_tabs() {
        assert_eq!(clean_text("hello \t  \tworld"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(clean_text("  hello world \n "), "hello world");
    }

    #[test]
    fn test_replaces_nul() {
        assert_eq!(clean_text("hello\0world"), "hello world");
        assert!(!clean_text("a\0\0b").contains('\0'));
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(clean_text("line1\n\n\n\n\nline2"), "line1\n\nline2");
        assert_eq!(clean_text("line1\n\nline2"), "line1\n\nline2");
        assert_eq!(clean_text("line1\nline2"), "line1\nline2");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \t\n\n\n "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "a \t b\n\n\n\nc",
            "\0\0 x \n \n\n\n\n y\t",
            "  Title\n\n\n\nBody text.  More\ttext. ",
            "a\n \n\n\nb",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "not idempotent for {s:?}");
            assert!(!once.contains("\n\n\n"));
        }
    }
}
