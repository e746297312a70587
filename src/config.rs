use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for a chunk check. Every field has a default, so an empty TOML
/// document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// `true` asks the engine for corrections, `false` for a bare
    /// correctness flag with the engine-normalized word.
    pub suggestions: bool,

    /// Upper bound on engine checks in flight at once. `None` checks every
    /// unique word concurrently.
    pub max_concurrency: Option<usize>,

    /// Candidates matching any of these regexes are never sent to the engine.
    pub ignore_patterns: Vec<String>,
}

impl CheckOptions {
    pub fn with_suggestions(mut self, suggestions: bool) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit);
        self
    }

    pub fn with_ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Effective fan-out for `pending` words. Zero is clamped to one.
    pub(crate) fn concurrency_for(&self, pending: usize) -> usize {
        match self.max_concurrency {
            Some(limit) => limit.clamp(1, pending.max(1)),
            None => pending.max(1),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse check options")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
