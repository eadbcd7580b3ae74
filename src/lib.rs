//! Extractive study pipeline: turns already-extracted page text into
//! document overviews, per-topic study sheets, exam and practice
//! questions, and rubric marks for typed answers.
//!
//! Layers, outermost first:
//!   1. `cli`          - clap commands and text/JSON rendering
//!   2. `application`  - use cases (overview, sheet, mark)
//!   3. `domain`       - plain data types and the PageSource trait
//!   4. `data`         - loading, normalising, splitting, tokenizing
//!   5. `analysis`     - topics, headings, relevance, summaries,
//!                       simplification, questions, grading
//!   6. `infra`        - configuration store

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod analysis;
pub mod infra;

pub use analysis::grader::mark_answer;
pub use analysis::topics::extract_topics;
pub use application::{build_overview, build_topic_sheet, extract_expected_keywords};
pub use domain::page::{Document, Page};
