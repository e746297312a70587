use std::io;

use thiserror::Error;

/// Errors surfaced by a chunk check. A check either fails with one of these
/// or returns the complete result list, never both.
#[derive(Error, Debug)]
pub enum CheckError {
    /// No engine was supplied. Raised before any word is looked at.
    #[error("a spell engine instance is required to check text")]
    MissingEngine,

    /// The engine failed on a word; the whole batch is discarded.
    #[error("spell engine failed while checking {word:?}: {source}")]
    Engine {
        word: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The blocking wrapper could not build its runtime.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
}

impl CheckError {
    pub(crate) fn engine(word: &str, source: anyhow::Error) -> Self {
        CheckError::Engine {
            word: word.to_string(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
