use crate::source::WordSource;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where a definition is in its lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompletionInfo {
    Pending,
    Completed {
        completed_at: DateTime<Local>,
        wpm: f64,
        accuracy: f64,
    },
}

/// The composed word list for one typing test. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition<T = String> {
    sources: BTreeSet<WordSource>,
    words: Vec<T>,
    modifier_names: Vec<String>,
    completion: CompletionInfo,
}

impl<T> TestDefinition<T> {
    pub(crate) fn new(
        sources: impl IntoIterator<Item = WordSource>,
        words: Vec<T>,
        modifier_names: Vec<String>,
    ) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            words,
            modifier_names,
            completion: CompletionInfo::Pending,
        }
    }

    pub fn sources(&self) -> &BTreeSet<WordSource> {
        &self.sources
    }

    pub fn words(&self) -> &[T] {
        &self.words
    }

    /// Names of the modifiers that ran, in the order they ran
    pub fn modifier_names(&self) -> &[String] {
        &self.modifier_names
    }

    pub fn completion(&self) -> &CompletionInfo {
        &self.completion
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.completion, CompletionInfo::Completed { .. })
    }

    /// Record the outcome of taking this test. Non-finite or negative figures
    /// are stored as 0 and accuracy is capped at 100.
    pub fn complete(self, wpm: f64, accuracy: f64, completed_at: DateTime<Local>) -> Self {
        Self {
            completion: CompletionInfo::Completed {
                completed_at,
                wpm: finite_or_zero(wpm).max(0.0),
                accuracy: finite_or_zero(accuracy).clamp(0.0, 100.0),
            },
            ..self
        }
    }

    pub fn into_words(self) -> Vec<T> {
        self.words
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
