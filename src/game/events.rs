//! Animation hints for the rendering layer.
//!
//! Every committed state mutation optionally emits a `BoardEvent`.
//! A renderer can drain the queue to drive staggered flip animations;
//! the authoritative state has already changed by the time the event
//! exists, so draining (or ignoring) events never affects correctness.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// A presentation hint emitted after a state mutation committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Cards flipped possible -> eliminated, in catalog order.
    Eliminated { indices: Vec<usize> },

    /// Cards flipped eliminated -> possible (undo), in catalog order.
    Restored { indices: Vec<usize> },

    /// A single card was toggled.
    Toggled { index: usize, possible: bool },

    /// The whole board was reset to all-possible.
    BoardReset,

    /// The phase machine advanced.
    PhaseChanged(Phase),
}

/// FIFO queue of pending presentation hints.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<BoardEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: BoardEvent) {
        self.events.push_back(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        self.events.drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
