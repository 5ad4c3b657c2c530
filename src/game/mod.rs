//! Game driver: phases, state, commands, and presentation events.
//!
//! ## Key Types
//!
//! - `Phase` / `Player`: the linear state machine and the two seats
//! - `GameState`: everything the renderer projects into screens
//! - `GameEngine`: the command surface (filters, guesses, undo)
//! - `BoardEvent`: post-commit presentation hints
//! - `QuestionLog`: per-phase record of scored questions

pub mod engine;
pub mod events;
pub mod phase;
pub mod question_log;
pub mod state;

pub use engine::{FilterOutcome, GameEngine, GuessOutcome, UndoOutcome};
pub use events::{BoardEvent, EventQueue};
pub use phase::{PerPlayer, Phase, Player};
pub use question_log::{QuestionLog, QuestionLogEntry};
pub use state::GameState;
