// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, loads pages and config, hands off
// to a Layer 2 use case and prints the result, either as plain
// text or as JSON (--json).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{Commands, InitConfigArgs, InputArgs, MarkArgs, TopicArgs, TopicsArgs};
use serde::Serialize;
use std::fs;

use crate::application::{MarkOutcome, MarkUseCase, OverviewUseCase, SheetUseCase};
use crate::data::loader::PageLoader;
use crate::domain::page::Page;
use crate::domain::study::{DocumentOverview, TopicCount, TopicSheet};
use crate::domain::traits::PageSource;
use crate::infra::config::{load_or_default, ConfigStore, StudyConfig};

#[derive(Parser, Debug)]
#[command(
    name = "exam-buddy",
    version,
    about = "Turn extracted textbook pages into study sheets, exam questions and marked answers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the right use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Overview(args)   => run_overview(args),
            Commands::Topics(args)     => run_topics(args),
            Commands::Sheet(args)      => run_sheet(args, false),
            Commands::Questions(args)  => run_sheet(args, true),
            Commands::Mark(args)       => run_mark(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

/// Load config and pages; an input with no text is an error here
/// so the user gets a message instead of an empty report.
fn load(args: &InputArgs) -> Result<(StudyConfig, Vec<Page>)> {
    let config = load_or_default(args.config.as_deref())?;
    let doc    = PageLoader::new(&args.input).load_document()?;
    if doc.is_empty() {
        bail!(
            "No text found in '{}'. Scanned PDFs need OCR before they can be studied.",
            args.input.display()
        );
    }
    Ok((config, doc.pages))
}

fn require_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        bail!("Pick or type a topic (--topic)");
    }
    Ok(topic)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_overview(args: InputArgs) -> Result<()> {
    let (config, pages) = load(&args)?;
    let overview = OverviewUseCase::new(config).execute(&pages);

    if args.json {
        return print_json(&overview);
    }
    print_overview(&overview);
    Ok(())
}

fn run_topics(args: TopicsArgs) -> Result<()> {
    let (mut config, pages) = load(&args.input)?;
    if let Some(top) = args.top {
        config.suggested_topics = top;
    }
    let topics = OverviewUseCase::new(config).suggest_topics(&pages);

    if args.input.json {
        return print_json(&topics);
    }
    print_topics(&topics);
    Ok(())
}

fn run_sheet(args: TopicArgs, questions_only: bool) -> Result<()> {
    let topic = require_topic(&args.topic)?;
    let (config, pages) = load(&args.input)?;
    let sheet = SheetUseCase::new(config).execute(&pages, topic);

    match (args.input.json, questions_only) {
        (true, false)  => print_json(&sheet),
        (true, true)   => print_json(&serde_json::json!({
            "topic":              sheet.topic,
            "exam_questions":     sheet.exam_questions,
            "practice_questions": sheet.practice_questions,
        })),
        (false, false) => {
            print_sheet(&sheet);
            Ok(())
        }
        (false, true)  => {
            print_questions(&sheet);
            Ok(())
        }
    }
}

fn run_mark(args: MarkArgs) -> Result<()> {
    let topic  = require_topic(&args.topic)?;
    let answer = match (&args.answer, &args.answer_file) {
        (Some(text), _)    => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read answer from '{}'", path.display()))?,
        (None, None)       => bail!("Provide --answer or --answer-file"),
    };

    let (config, pages) = load(&args.input)?;
    let outcome = MarkUseCase::new(config).execute(&pages, topic, &answer);

    if args.input.json {
        return print_json(&outcome);
    }
    print_marking(&outcome);
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let store = ConfigStore::new(&args.path);
    store.save(&StudyConfig::default())?;
    println!("Default configuration written to '{}'", store.path().display());
    Ok(())
}

// ─── Text rendering ──────────────────────────────────────────────────────────

fn page_tag(page: u32) -> String {
    if page == 0 {
        "Unpaginated".to_string()
    } else {
        format!("Page {page}")
    }
}

fn print_overview(overview: &DocumentOverview) {
    println!("What this document is about");
    for s in &overview.what_it_is {
        println!("  • {s}");
    }

    println!("\nMain sections");
    if overview.headings.is_empty() {
        println!("  No headings detected.");
    }
    for h in &overview.headings {
        println!("  • {} ({})", h.heading, page_tag(h.page));
    }

    println!("\nKey terms");
    println!("  {}", overview.key_terms.join(", "));
}

fn print_topics(topics: &[TopicCount]) {
    for (i, t) in topics.iter().enumerate() {
        println!("{:>3}. {} ({})", i + 1, t.word, t.count);
    }
}

fn print_sheet(sheet: &TopicSheet) {
    println!("Topic: {}", sheet.topic);

    println!("\nSummary");
    for s in &sheet.summary {
        println!("  • {s}");
    }

    println!("\nSimplified explanation");
    for s in &sheet.simple_explanation {
        println!("  • {s}");
    }

    println!("\nKey terms to remember");
    if sheet.key_terms.is_empty() {
        println!("  -");
    } else {
        println!("  {}", sheet.key_terms.join(", "));
    }

    println!("\nWhere this came from");
    for c in &sheet.citations {
        println!("  • {}: {}", page_tag(c.page), c.sentence);
    }
}

fn print_questions(sheet: &TopicSheet) {
    println!("Exam-style questions: {}", sheet.topic);
    for (i, q) in sheet.exam_questions.iter().enumerate() {
        println!("{:>3}. [{}] {}", i + 1, q.kind.label(), q.prompt);
    }

    println!("\nPractice questions");
    for (i, q) in sheet.practice_questions.iter().enumerate() {
        println!("{:>3}. {}", i + 1, q.question);
        println!("     hint: {}", q.answer_hint);
    }
}

fn print_marking(outcome: &MarkOutcome) {
    let r = &outcome.result;

    println!("Score: {}/100  Band: {}", r.score, r.band);
    println!("\nMarking rubric");
    println!("  Content & keywords   {:>2}/60", r.rubric.content);
    println!("  Clarity & structure  {:>2}/25", r.rubric.clarity);
    println!("  Examples             {:>2}/15", r.rubric.examples);

    println!("\nFeedback");
    for f in &r.feedback {
        println!("  • {f}");
    }

    let list = |items: &[String]| if items.is_empty() { "-".to_string() } else { items.join(", ") };
    println!("\nFound keywords:   {}", list(&r.found_keywords));
    println!("Missing keywords: {}", list(&r.missing_keywords));
}
