// ============================================================
// Layer 5: Text Analysis
// ============================================================
// The extractive study pipeline. Every function here is pure:
// text in, plain data out, no I/O and no shared mutable state,
// so any of them can be called from many requests at once.
//
//   topics.rs      - frequency-ranked keywords
//   headings.rs    - short, distinctively cased lines per page
//   relevance.rs   - sentence scoring against a topic string
//   summarizer.rs  - frequency-weighted extractive summary
//   simplifier.rs  - rule-based plain-language rewrite
//   questions.rs   - cloze, practice and exam prompts
//   grader.rs      - keyword / clarity / example rubric marker
//
// Nothing in this layer returns an error. Empty or degenerate
// input gives an empty (or fallback) result instead.

pub mod topics;
pub mod headings;
pub mod relevance;
pub mod summarizer;
pub mod simplifier;
pub mod questions;
pub mod grader;
