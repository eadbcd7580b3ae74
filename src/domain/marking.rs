// ============================================================
// Layer 3: Marking Result Types
// ============================================================
// The output of the answer grader. Three rubric areas:
//
//   content   0-60   expected keywords used
//   clarity   0-25   length, sentences, connectives
//   examples  0-15   a concrete example or application
//
// score == min(100, content + clarity + examples)

use std::fmt;

use serde::{Deserialize, Serialize};

pub const CONTENT_MAX: u32 = 60;
pub const CLARITY_MAX: u32 = 25;
pub const EXAMPLES_MAX: u32 = 15;

/// Coarse label derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs work")]
    NeedsWork,
}

impl Band {
    /// >=80 Excellent, >=65 Good, >=45 Fair, anything else Needs work
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Band::Excellent
        } else if score >= 65 {
            Band::Good
        } else if score >= 45 {
            Band::Fair
        } else {
            Band::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good      => "Good",
            Band::Fair      => "Fair",
            Band::NeedsWork => "Needs work",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marks per rubric area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub content:  u32,
    pub clarity:  u32,
    pub examples: u32,
}

impl Rubric {
    pub fn total(&self) -> u32 {
        self.content + self.clarity + self.examples
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkingResult {
    pub score:            u32,
    pub band:             Band,
    pub rubric:           Rubric,
    pub found_keywords:   Vec<String>,
    pub missing_keywords: Vec<String>,
    pub feedback:         Vec<String>,
}
