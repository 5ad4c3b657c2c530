//! Question log - the per-phase record of scored events.
//!
//! One entry per question (filter application, missed guess, or manual
//! scored event), appended in lockstep with scored history pushes.
//! No-effect filters are never logged.

use serde::{Deserialize, Serialize};

/// One logged question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLogEntry {
    /// Human-readable description of the question.
    pub label: String,

    /// Cards eliminated by this question.
    pub eliminated: usize,

    /// Still-possible card count after the question.
    pub active_after: usize,

    /// True for manually logged events (missed guesses, scorecard
    /// entries), false for engine-driven filters.
    pub is_manual: bool,
}

/// Ordered log of questions for the active guessing phase.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuestionLog {
    entries: im::Vector<QuestionLogEntry>,
}

impl QuestionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: QuestionLogEntry) {
        self.entries.push_back(entry);
    }

    /// Remove the most recent entry (on undo).
    pub fn pop(&mut self) -> Option<QuestionLogEntry> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionLogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&QuestionLogEntry> {
        self.entries.last()
    }
}
