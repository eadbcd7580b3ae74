// ============================================================
// Layer 3: Study Artifact Types
// ============================================================
// Everything the pipeline hands back to a caller for a document
// or a topic. All of it is plain data, built fresh per request.

use serde::{Deserialize, Serialize};

/// A word and how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub word:  String,
    pub count: usize,
}

impl TopicCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

/// A short, distinctively cased line near the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub heading: String,
    pub page:    u32,
}

/// An evidence sentence tied to the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub page:     u32,
    pub sentence: String,
}

/// The "what is this document about" view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentOverview {
    pub what_it_is: Vec<String>,
    pub headings:   Vec<Heading>,
    pub key_terms:  Vec<String>,
}

/// The family an exam prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Definition,
    Enumeration,
    Application,
    Scenario,
    Comparison,
    Synthesis,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Definition  => "Definition",
            QuestionKind::Enumeration => "Enumeration",
            QuestionKind::Application => "Application",
            QuestionKind::Scenario    => "Scenario",
            QuestionKind::Comparison  => "Comparison",
            QuestionKind::Synthesis   => "Synthesis",
        }
    }
}

/// A topic-templated exam prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub kind:   QuestionKind,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticeKind {
    Cloze,
    Short,
}

/// A fill-in-the-blank or short-answer practice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    #[serde(rename = "type")]
    pub kind:        PracticeKind,
    pub question:    String,
    pub answer_hint: String,
}

/// Everything built for one topic.
///
/// Building a sheet twice from the same pages and topic must give
/// an identical sheet, so nothing in here may depend on hashing
/// order or randomness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSheet {
    pub topic:              String,
    pub summary:            Vec<String>,
    pub simple_explanation: Vec<String>,
    pub key_terms:          Vec<String>,
    pub exam_questions:     Vec<ExamQuestion>,
    pub practice_questions: Vec<PracticeQuestion>,
    pub citations:          Vec<Citation>,
}
