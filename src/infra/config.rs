// ============================================================
// Layer 6: Study Configuration
// ============================================================
// Every "how many" the pipeline uses lives here. The grading
// rubric is NOT configurable; its maxima live in
// `domain::marking` and its thresholds in `analysis::grader`.
//
// File format: pretty JSON, missing fields fall back to their
// defaults thanks to #[serde(default)].
//
//   {
//     "max_text_chars": 320000,
//     "summary_sentences": 7,
//     ...
//   }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Input cap: total characters analysed per request
    pub max_text_chars: usize,

    // ── Overview ─────────────────────────────────────────────────────────────
    pub overview_sentences: usize,
    pub overview_key_terms: usize,

    /// Topic suggestions offered by `topics`
    pub suggested_topics: usize,

    // ── Topic sheet ──────────────────────────────────────────────────────────
    /// Relevant sentences the summary is built from
    pub relevant_sentences: usize,
    pub summary_sentences:  usize,
    pub key_terms:          usize,
    pub citations:          usize,

    /// Sentence pool the practice questions are cut from
    pub practice_pool:   usize,
    pub cloze_questions: usize,

    /// Fallback when the topic never appears: the first
    /// `fallback_sentences_per_page` sentences of each of the
    /// first `fallback_pages` pages
    pub fallback_pages:              usize,
    pub fallback_sentences_per_page: usize,

    // ── Marking ──────────────────────────────────────────────────────────────
    pub expected_keywords: usize,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            max_text_chars:              320_000,
            overview_sentences:          6,
            overview_key_terms:          25,
            suggested_topics:            30,
            relevant_sentences:          20,
            summary_sentences:           7,
            key_terms:                   12,
            citations:                   8,
            practice_pool:               30,
            cloze_questions:             8,
            fallback_pages:              4,
            fallback_sentences_per_page: 5,
            expected_keywords:           16,
        }
    }
}

/// Reads and writes a StudyConfig as JSON.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, cfg: &StudyConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved study config to '{}'", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<StudyConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;
        tracing::debug!("Loaded study config from '{}'", self.path.display());
        Ok(cfg)
    }
}

/// The config at `path`, or the defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<StudyConfig> {
    match path {
        Some(p) => ConfigStore::new(p).load(),
        None    => Ok(StudyConfig::default()),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("study.json"));
        let cfg   = StudyConfig { summary_sentences: 3, ..StudyConfig::default() };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "key_terms": 5 }"#).unwrap();

        let cfg = load_or_default(Some(&path)).unwrap();
        assert_eq!(cfg.key_terms, 5);
        assert_eq!(cfg.max_text_chars, 320_000);
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_or_default(None).unwrap(), StudyConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_or_default(Some(&dir.path().join("absent.json"))).is_err());
    }
}
