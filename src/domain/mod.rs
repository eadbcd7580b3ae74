// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain structs, enums and traits that describe the study
// material this tool works with:
//
//   page.rs     - Page and Document (the extracted input text)
//   study.rs    - DocumentOverview, TopicSheet and the question types
//   marking.rs  - MarkingResult, Rubric and Band
//   traits.rs   - PageSource, the seam the loaders implement
//
// Rules for this layer:
//   - NO file I/O
//   - NO text analysis (that lives in `analysis`)
//   - Only data and the small helpers that keep it consistent
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Extracted page text and the document it belongs to
pub mod page;

// Overview, topic sheet and question types
pub mod study;

// Answer marking result types
pub mod marking;

// Core abstractions (traits) that other layers implement
pub mod traits;
