//! Elimination board - the per-card "still possible" vector.
//!
//! One boolean per catalog position: `true` means the card could still
//! be the secret, `false` means it has been eliminated. The board is
//! always index-aligned with the catalog; it is only mutated by the
//! filter engine, manual toggles, and undo.

use serde::{Deserialize, Serialize};

/// Index-aligned boolean possibility vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<bool>,
}

impl Board {
    /// Create a board with every card possible.
    ///
    /// `len` must equal the catalog size.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "Board must cover at least one card");
        Self {
            slots: vec![true; len],
        }
    }

    /// Number of slots (equals catalog size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the card at `index` is still possible.
    ///
    /// Panics on an out-of-range index (caller bug).
    #[must_use]
    pub fn is_possible(&self, index: usize) -> bool {
        assert!(index < self.slots.len(), "Board index {} out of range", index);
        self.slots[index]
    }

    /// Set the slot at `index`.
    pub fn set(&mut self, index: usize, possible: bool) {
        assert!(index < self.slots.len(), "Board index {} out of range", index);
        self.slots[index] = possible;
    }

    /// Count of still-possible cards.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|&&v| v).count()
    }

    /// Positions of still-possible cards, in catalog order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| i)
    }

    /// Positions of eliminated cards, in catalog order.
    pub fn eliminated_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, &v)| !v)
            .map(|(i, _)| i)
    }

    /// Restore every slot to possible.
    pub fn reset(&mut self) {
        self.slots.fill(true);
    }

    /// Slice view of all slots.
    #[must_use]
    pub fn slots(&self) -> &[bool] {
        &self.slots
    }
}
