pub mod positions;
pub mod tokenizer;

use crate::engine::SpellEngine;
use crate::error::{CheckError, Result};
use crate::{AnnotatedResult, CheckOptions, CheckResult};
use futures::stream::{self, StreamExt, TryStreamExt};
use positions::populate_positions;
use regex::Regex;
use std::fmt;
use tracing::{debug, trace, warn};

/// Checks chunks of text against one engine with fixed options.
pub struct ChunkChecker<'e, E> {
    engine: &'e E,
    options: CheckOptions,
    ignore_patterns: Vec<Regex>,
}

impl<'e, E: SpellEngine> ChunkChecker<'e, E> {
    pub fn new(engine: &'e E, options: CheckOptions) -> Self {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &options.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!(pattern = pattern.as_str(), error = %e, "ignoring invalid pattern"),
            }
        }

        Self {
            engine,
            options,
            ignore_patterns,
        }
    }

    /// Report every misspelled word of `chunk` with the places it occurs.
    ///
    /// Each unique candidate is checked once, concurrently with the others
    /// (up to `max_concurrency`). The first engine failure aborts the whole
    /// check and drops the checks still in flight. On success the results
    /// follow the order in which their words first appear in the chunk.
    pub async fn check(&self, chunk: &str) -> Result<Vec<AnnotatedResult>> {
        let candidates: Vec<String> = tokenizer::tokenize(chunk)
            .into_iter()
            .filter(|word| !self.should_ignore(word))
            .collect();

        let limit = self.options.concurrency_for(candidates.len());
        debug!(
            candidates = candidates.len(),
            limit,
            suggestions = self.options.suggestions,
            "checking chunk"
        );

        let mut checked: Vec<(usize, Option<CheckResult>)> =
            stream::iter(candidates.into_iter().enumerate())
                .map(move |(index, word)| async move {
                    check_word(self.engine, &self.options, &word)
                        .await
                        .map(|result| (index, result))
                })
                .buffer_unordered(limit)
                .try_collect()
                .await?;

        // Checks finish in any order; restore the tokenizer's order.
        checked.sort_unstable_by_key(|(index, _)| *index);

        let results = populate_positions(chunk, checked.into_iter().map(|(_, result)| result));
        debug!(flagged = results.len(), "chunk checked");

        Ok(results)
    }

    fn should_ignore(&self, word: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(word))
    }
}

/// Ask the engine about one candidate. `None` means the word is spelled
/// correctly.
///
/// In correctness mode the result carries the engine's normalized word, not
/// `word` itself.
pub async fn check_word<E: SpellEngine>(
    engine: &E,
    options: &CheckOptions,
    word: &str,
) -> Result<Option<CheckResult>> {
    if options.suggestions {
        let reply = engine
            .suggest(word)
            .await
            .map_err(|e| CheckError::engine(word, e))?;
        trace!(word, correct = reply.correct, "suggest");

        if reply.correct {
            return Ok(None);
        }
        Ok(Some(CheckResult::Suggestions {
            word: word.to_string(),
            suggestions: reply.suggestions,
        }))
    } else {
        let reply = engine
            .check_correct(word)
            .await
            .map_err(|e| CheckError::engine(word, e))?;
        trace!(word, correct = reply.correct, normalized = reply.word.as_str(), "check");

        if reply.correct {
            return Ok(None);
        }
        Ok(Some(CheckResult::Correctness {
            word: reply.word,
            correct: false,
        }))
    }
}

/// Check `chunk` (anything with a string form) with `engine`.
///
/// Fails with [`CheckError::MissingEngine`] before touching the text when no
/// engine is given.
pub async fn check_chunk<E, T>(
    engine: Option<&E>,
    chunk: T,
    options: &CheckOptions,
) -> Result<Vec<AnnotatedResult>>
where
    E: SpellEngine,
    T: fmt::Display,
{
    let engine = engine.ok_or(CheckError::MissingEngine)?;
    let chunk = chunk.to_string();
    ChunkChecker::new(engine, options.clone()).check(&chunk).await
}

/// [`check_chunk`] for synchronous callers, on a private current-thread
/// runtime. Must not be called from inside an async runtime.
pub fn check_chunk_blocking<E, T>(
    engine: Option<&E>,
    chunk: T,
    options: &CheckOptions,
) -> Result<Vec<AnnotatedResult>>
where
    E: SpellEngine,
    T: fmt::Display,
{
    let engine = engine.ok_or(CheckError::MissingEngine)?;
    let chunk = chunk.to_string();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let checker = ChunkChecker::new(engine, options.clone());
    runtime.block_on(checker.check(&chunk))
}
