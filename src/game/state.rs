//! Game state: everything the renderer projects into screens.
//!
//! One `GameState` exists per game. It is owned by the `GameEngine`
//! and mutated only through engine commands, so every mutation is
//! recorded in history and mirrored in the question log/progression
//! series as the invariants require.
//!
//! Scores and progression series are per-seat and survive into the
//! results phase; the history stack and question log belong to
//! whichever seat is currently guessing and are cleared when a new
//! guessing phase starts.

use serde::{Deserialize, Serialize};

use super::question_log::QuestionLog;
use super::phase::{PerPlayer, Phase, Player};
use crate::board::Board;
use crate::history::HistoryStack;
use crate::view::ViewPrefs;

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Current stage of the phase machine.
    pub phase: Phase,

    /// Elimination board, index-aligned with the catalog.
    pub board: Board,

    /// The card each seat must guess (set during the opponent's pick
    /// phase, immutable thereafter).
    targets: PerPlayer<Option<usize>>,

    /// Questions asked per seat.
    scores: PerPlayer<u32>,

    /// Active-card count after each question, per seat.
    progression: PerPlayer<im::Vector<usize>>,

    /// Undo stack for the active guessing phase.
    pub history: HistoryStack,

    /// Question log for the active guessing phase.
    pub question_log: QuestionLog,

    /// The seat currently guessing (meaningful from the first guessing
    /// phase onward).
    pub current_player: Player,

    /// Display preferences (sorting, view filter).
    pub prefs: ViewPrefs,
}

impl GameState {
    /// Fresh state for a catalog of `catalog_len` cards.
    #[must_use]
    pub fn new(catalog_len: usize) -> Self {
        Self {
            phase: Phase::Start,
            board: Board::new(catalog_len),
            targets: PerPlayer::with_value(None),
            scores: PerPlayer::with_value(0),
            progression: PerPlayer::new(|_| im::Vector::new()),
            history: HistoryStack::new(),
            question_log: QuestionLog::new(),
            current_player: Player::P1,
            prefs: ViewPrefs::default(),
        }
    }

    /// The catalog position of the card `player` must guess, if set.
    #[must_use]
    pub fn target_of(&self, player: Player) -> Option<usize> {
        self.targets[player]
    }

    /// Record `player`'s target card.
    ///
    /// Panics if the target was already set: a secret is chosen exactly
    /// once per game.
    pub(crate) fn set_target(&mut self, player: Player, index: usize) {
        assert!(
            self.targets[player].is_none(),
            "{}'s secret target is already set",
            player
        );
        self.targets[player] = Some(index);
    }

    /// Questions asked by `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Active-card counts after each of `player`'s questions.
    #[must_use]
    pub fn progression(&self, player: Player) -> &im::Vector<usize> {
        &self.progression[player]
    }

    /// Still-possible card count.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.board.active_count()
    }

    pub(crate) fn add_score(&mut self, player: Player) {
        self.scores[player] += 1;
    }

    /// Decrement, floored at zero.
    pub(crate) fn dec_score(&mut self, player: Player) {
        self.scores[player] = self.scores[player].saturating_sub(1);
    }

    /// Adjust by a signed delta, floored at zero.
    pub(crate) fn adjust_score(&mut self, player: Player, delta: i32) {
        let score = i64::from(self.scores[player]) + i64::from(delta);
        self.scores[player] = score.max(0) as u32;
    }

    pub(crate) fn push_progression(&mut self, player: Player, active: usize) {
        self.progression[player].push_back(active);
    }

    pub(crate) fn pop_progression(&mut self, player: Player) {
        self.progression[player].pop_back();
    }

    /// Reset the per-phase state for `player` starting a guessing run:
    /// full board, empty history/log, zero score, empty progression.
    pub(crate) fn begin_guessing(&mut self, player: Player) {
        self.current_player = player;
        self.board.reset();
        self.history.clear();
        self.question_log.clear();
        self.scores[player] = 0;
        self.progression[player].clear();
    }
}
