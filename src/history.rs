//! Undo history - reversible board mutations.
//!
//! Every mutation of the elimination board is recorded as a
//! `HistoryAction` so undo is an exact inverse, not a recomputation.
//! The stack belongs to the player whose guessing phase is running and
//! is cleared when a new phase starts.
//!
//! ## Action kinds
//!
//! - `Filter`: positions flipped possible -> eliminated by one filter
//!   application. Prior values are always `true` by construction, so
//!   only the positions are stored.
//! - `Flip`: one user-driven toggle with its prior value. Never scored.
//! - `Composite`: a labelled scored event (missed guess, manual
//!   scorecard entry) with zero or more embedded flips.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One toggled slot with its prior value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipRecord {
    pub index: usize,
    /// Board value before the flip.
    pub was_possible: bool,
}

/// A reversible mutation against the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryAction {
    /// One filter application. Every listed position was possible
    /// before and eliminated after.
    Filter {
        eliminated: SmallVec<[usize; 8]>,
    },

    /// One manual single-card toggle.
    Flip(FlipRecord),

    /// A scored event that is not a filter, with any flips it caused.
    Composite {
        label: String,
        flips: SmallVec<[FlipRecord; 2]>,
    },
}

impl HistoryAction {
    /// Whether this action counts as a question (affects score,
    /// progression, and the question log).
    #[must_use]
    pub fn is_scored(&self) -> bool {
        !matches!(self, HistoryAction::Flip(_))
    }
}

/// Stack of reversible actions for the active guessing phase.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    actions: im::Vector<HistoryAction>,
}

impl HistoryStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an action.
    pub fn push(&mut self, action: HistoryAction) {
        self.actions.push_back(action);
    }

    /// Pop the most recent action.
    pub fn pop(&mut self) -> Option<HistoryAction> {
        self.actions.pop_back()
    }

    /// Peek at the most recent action.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryAction> {
        self.actions.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of scored (Filter/Composite) actions on the stack.
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_scored()).count()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryAction> {
        self.actions.iter()
    }
}
