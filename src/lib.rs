//! # guess-royale
//!
//! Engine for a two-player "Guess Who"-style deduction game over a
//! card catalog. Each player secretly picks the opponent's target
//! card, then takes a guessing phase: asking attribute questions that
//! eliminate cards from the board until they can name the secret.
//!
//! ## Design Principles
//!
//! 1. **Explicit state, no globals**: one `GameState` owned by a
//!    `GameEngine`; every command goes through the engine, so unit
//!    tests never need a UI.
//!
//! 2. **Synchronous commits**: state mutations commit immediately.
//!    Animation is driven by a separate `BoardEvent` queue that is
//!    never load-bearing.
//!
//! 3. **Exact-inverse undo**: every board mutation is recorded with
//!    enough information to reverse it precisely, grouped per
//!    user-facing question.
//!
//! ## Modules
//!
//! - `cards`: card records, the session catalog, role classifications
//! - `board`: the per-card "still possible" vector
//! - `filters`: declarative question vocabulary
//! - `history`: reversible action records and the undo stack
//! - `game`: phase machine, game state, command engine, events
//! - `view`: display sorting/filtering projections
//! - `stats`: end-of-game analytics

pub mod board;
pub mod cards;
pub mod filters;
pub mod game;
pub mod history;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use crate::board::Board;

pub use crate::cards::{Card, CardType, Catalog, Rarity, Role, RoleSets, TargetMode};

pub use crate::filters::{CardTrait, ElixirCmp, FilterSpec};

pub use crate::history::{FlipRecord, HistoryAction, HistoryStack};

pub use crate::game::{
    BoardEvent, FilterOutcome, GameEngine, GameState, GuessOutcome, PerPlayer, Phase, Player,
    QuestionLog, QuestionLogEntry, UndoOutcome,
};

pub use crate::stats::{Better, GameResults, PlayerSummary};

pub use crate::view::{CountLevel, SortDir, SortKey, ViewFilter, ViewPrefs};
