// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Subcommands:
//   overview     what the document is about, headings, key terms
//   topics       ranked topic suggestions
//   sheet        study sheet for one topic
//   questions    exam and practice questions for one topic
//   mark         mark an answer on a topic
//   init-config  write the default configuration file
//
// Every command that reads material takes --input (a file or a
// directory), an optional --config and --json for machine output.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise what the document is about
    Overview(InputArgs),

    /// Suggest topics ranked by how often they appear
    Topics(TopicsArgs),

    /// Build a study sheet for one topic
    Sheet(TopicArgs),

    /// Generate exam and practice questions for one topic
    Questions(TopicArgs),

    /// Mark an answer against the topic's expected keywords
    Mark(MarkArgs),

    /// Write the default configuration as JSON
    InitConfig(InitConfigArgs),
}

/// Arguments shared by every command that reads study material.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// A .txt / .json / .docx file, or a directory of them
    #[arg(long, short)]
    pub input: PathBuf,

    /// JSON configuration file (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TopicsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How many topics to list (overrides the config)
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args, Debug)]
pub struct TopicArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// The topic to study, e.g. "photosynthesis"
    #[arg(long, short)]
    pub topic: String,
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, short)]
    pub topic: String,

    /// The answer text
    #[arg(long, conflicts_with = "answer_file", required_unless_present = "answer_file")]
    pub answer: Option<String>,

    /// Read the answer from a file instead
    #[arg(long)]
    pub answer_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the configuration
    #[arg(long, default_value = "exam-buddy.json")]
    pub path: PathBuf,
}
