// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between "files on disk" and "words we can count".
//
//   .txt / .json / .docx files
//       │
//       ▼
//   PageLoader        → reads files, yields numbered pages
//       │
//       ▼
//   clean_text        → normalises whitespace and NUL bytes
//       │
//       ▼
//   split_sentences   → ordered sentence list
//   tokenize          → lowercase content words
//
// Each module is responsible for exactly one step.

/// Loads pages from text, JSON and .docx files
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod preprocessor;

/// Splits text into sentences and paragraphs
pub mod splitter;

/// Lowercase word tokens with stopwords removed
pub mod tokenizer;
