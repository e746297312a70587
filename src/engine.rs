//! The seam between this crate and whatever spell-checking engine the host
//! already has (hunspell bindings, a remote service, a word list...).

use std::future::Future;

use anyhow::Result;

/// Reply to a suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    pub correct: bool,
    /// Ranked corrections, best first. Ignored when `correct` is set.
    pub suggestions: Vec<String>,
}

/// Reply to a correctness request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correctness {
    pub correct: bool,
    /// The engine's normalized form of the word, which may differ in case
    /// or spelling from the word that was asked about.
    pub word: String,
}

/// A spell-checking engine shared read-only across concurrent checks.
///
/// Both methods may be called concurrently for different words; any locking
/// the backend needs is its own business.
///
/// Implementations can use plain `async fn`:
///
/// ```
/// use spellspan::{Correctness, SpellEngine, Suggestions};
///
/// struct Lowercase;
///
/// impl SpellEngine for Lowercase {
///     async fn suggest(&self, word: &str) -> anyhow::Result<Suggestions> {
///         let correct = word.chars().all(char::is_lowercase);
///         Ok(Suggestions {
///             correct,
///             suggestions: vec![word.to_lowercase()],
///         })
///     }
///
///     async fn check_correct(&self, word: &str) -> anyhow::Result<Correctness> {
///         Ok(Correctness {
///             correct: word.chars().all(char::is_lowercase),
///             word: word.to_string(),
///         })
///     }
/// }
/// ```
pub trait SpellEngine: Sync {
    fn suggest(&self, word: &str) -> impl Future<Output = Result<Suggestions>> + Send;

    fn check_correct(&self, word: &str) -> impl Future<Output = Result<Correctness>> + Send;
}
