pub mod checker;
pub mod config;
pub mod engine;
pub mod error;

pub use checker::{check_chunk, check_chunk_blocking, ChunkChecker};
pub use config::CheckOptions;
pub use engine::{Correctness, SpellEngine, Suggestions};
pub use error::{CheckError, Result};

use serde::{Deserialize, Serialize};

/// Outcome of checking one misspelled word.
///
/// Words the engine accepts never produce a `CheckResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckResult {
    /// Suggestion-mode: the candidate as tokenized plus the engine's ranked corrections.
    Suggestions {
        word: String,
        suggestions: Vec<String>,
    },
    /// Correctness-mode: the engine-normalized word, always `correct: false`.
    Correctness { word: String, correct: bool },
}

impl CheckResult {
    /// The word the position scan searches for.
    pub fn word(&self) -> &str {
        match self {
            CheckResult::Suggestions { word, .. } | CheckResult::Correctness { word, .. } => word,
        }
    }

    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            CheckResult::Suggestions { suggestions, .. } => Some(suggestions),
            CheckResult::Correctness { .. } => None,
        }
    }
}

/// One occurrence of a flagged word, in char offsets of the checked text.
///
/// `to` keeps the historical boundary quirk: when the match did not start at
/// offset 0 it points one past the word's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrencePosition {
    pub from: usize,
    pub to: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedResult {
    #[serde(flatten)]
    pub result: CheckResult,
    pub positions: Vec<OccurrencePosition>,
}

impl AnnotatedResult {
    pub fn word(&self) -> &str {
        self.result.word()
    }
}
