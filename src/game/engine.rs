//! The command surface driving a game.
//!
//! `GameEngine` owns the catalog, role sets, and `GameState`, and is
//! the only place state is mutated. Every command commits its state
//! change synchronously, then emits presentation hints to the event
//! queue; a renderer that never drains the queue still sees correct
//! state through the query surface.
//!
//! Contract violations (commands in the wrong phase, out-of-range
//! indices, double-set secrets) panic: they indicate caller bugs, not
//! user input. User-recoverable conditions (a filter that would change
//! nothing, a wrong guess, undo on an empty stack) are expressed in
//! the return types.

use smallvec::SmallVec;

use super::events::{BoardEvent, EventQueue};
use super::phase::{Phase, Player};
use super::state::GameState;
use crate::cards::{Card, Catalog, RoleSets};
use crate::filters::FilterSpec;
use crate::game::question_log::QuestionLogEntry;
use crate::history::{FlipRecord, HistoryAction, HistoryStack};
use crate::stats::{self, GameResults};
use crate::view::{self, SortKey, ViewFilter};

/// Result of a filter application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The filter eliminated at least one card and was scored/logged.
    Applied {
        eliminated: usize,
        active_after: usize,
    },

    /// The filter would have changed nothing: no mutation, no score,
    /// no log entry, no history push. Surfaced as a notice.
    NoEffect,
}

/// Result of a free-text guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Correct: the phase advanced; score and log are untouched.
    Correct,

    /// Wrong: costs one question, logged, phase unchanged.
    Incorrect { active_remaining: usize },
}

/// Result of an undo command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    Undone,
    /// Nothing on the stack; a no-op, not an error.
    Empty,
}

/// Owns and drives one game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    catalog: Catalog,
    roles: RoleSets,
    state: GameState,
    events: EventQueue,
}

impl GameEngine {
    /// New game over the given catalog with bundled role sets.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let state = GameState::new(catalog.len());
        Self {
            catalog,
            roles: RoleSets::bundled(),
            state,
            events: EventQueue::new(),
        }
    }

    /// New game with custom role classifications.
    #[must_use]
    pub fn with_roles(catalog: Catalog, roles: RoleSets) -> Self {
        let state = GameState::new(catalog.len());
        Self {
            catalog,
            roles,
            state,
            events: EventQueue::new(),
        }
    }

    /// New game over the bundled card dataset.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Catalog::bundled())
    }

    // === Query surface ===

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The seat currently guessing.
    ///
    /// Panics outside a guessing phase.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// The card `player` must guess, if their opponent has picked it.
    #[must_use]
    pub fn secret_of(&self, player: Player) -> Option<&Card> {
        self.state.target_of(player).map(|i| self.catalog.card(i))
    }

    /// Take all pending presentation hints.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        self.events.drain()
    }

    /// Board positions to display under the current view preferences.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        view::visible_indices(&self.catalog, &self.state.board, &self.state.prefs)
    }

    // === Display preferences ===

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.prefs.sort_key = key;
    }

    pub fn toggle_sort_dir(&mut self) {
        self.state.prefs.sort_dir = self.state.prefs.sort_dir.toggled();
    }

    pub fn set_view_filter(&mut self, filter: ViewFilter) {
        self.state.prefs.view_filter = filter;
    }

    // === Phase machine ===

    /// Advance to the next phase.
    ///
    /// Panics past `Results`, or when entering a phase whose
    /// preconditions are unmet (a guessing phase requires both secrets).
    pub fn advance_phase(&mut self) -> Phase {
        let next = self
            .state
            .phase
            .next()
            .expect("cannot advance past the Results phase");

        match next {
            Phase::PickP2 => {
                assert!(
                    self.state.target_of(Player::P2).is_some(),
                    "Player 1 must pick Player 2's target before their own pick phase ends"
                );
            }
            Phase::GuessP1 | Phase::GuessP2 => {
                assert!(
                    self.state.target_of(Player::P1).is_some()
                        && self.state.target_of(Player::P2).is_some(),
                    "both secrets must be set before guessing starts"
                );
                let player = next.guessing_player().unwrap();
                self.state.begin_guessing(player);
                self.events.emit(BoardEvent::BoardReset);
            }
            _ => {}
        }

        self.state.phase = next;
        self.events.emit(BoardEvent::PhaseChanged(next));
        log::info!("phase -> {:?}", next);
        next
    }

    /// Record the acting picker's choice of the *opponent's* target.
    ///
    /// Only valid during a pick phase; each secret is set exactly once.
    pub fn select_secret(&mut self, index: usize) {
        let picker = self
            .state
            .phase
            .picking_player()
            .expect("secrets are selected during pick phases");
        assert!(index < self.catalog.len(), "Card index {} out of range", index);

        self.state.set_target(picker.opponent(), index);
        log::info!(
            "{} picked a secret for {}",
            picker,
            picker.opponent()
        );
    }

    // === Filter engine ===

    /// Ask a question as an arbitrary predicate. Cards failing the
    /// predicate are eliminated.
    pub fn apply_filter(
        &mut self,
        predicate: impl Fn(&Card) -> bool,
        label: &str,
    ) -> FilterOutcome {
        let eliminated = self.doomed_by(|card| predicate(card));
        self.commit_filter(eliminated, label)
    }

    /// Ask a question from the declarative filter vocabulary.
    pub fn apply_spec(&mut self, spec: &FilterSpec) -> FilterOutcome {
        let label = spec.label();
        let roles = &self.roles;
        let eliminated = self.doomed_by(|card| spec.matches(card, roles));
        self.commit_filter(eliminated, &label)
    }

    /// Still-possible positions that `survives` rejects.
    fn doomed_by(&self, survives: impl Fn(&Card) -> bool) -> SmallVec<[usize; 8]> {
        self.catalog
            .iter()
            .enumerate()
            .filter(|(i, card)| self.state.board.is_possible(*i) && !survives(card))
            .map(|(i, _)| i)
            .collect()
    }

    fn commit_filter(&mut self, eliminated: SmallVec<[usize; 8]>, label: &str) -> FilterOutcome {
        let player = self
            .state
            .phase
            .guessing_player()
            .expect("filters only apply during a guessing phase");

        if eliminated.is_empty() {
            log::warn!("filter '{}' eliminated nothing; rejected", label);
            return FilterOutcome::NoEffect;
        }

        for &i in &eliminated {
            self.state.board.set(i, false);
        }

        let count = eliminated.len();
        let active_after = self.state.active_count();

        self.events.emit(BoardEvent::Eliminated {
            indices: eliminated.to_vec(),
        });
        self.state.history.push(HistoryAction::Filter { eliminated });
        self.state.push_progression(player, active_after);
        self.state.question_log.push(QuestionLogEntry {
            label: label.to_string(),
            eliminated: count,
            active_after,
            is_manual: false,
        });
        self.state.add_score(player);

        log::debug!(
            "{} asked '{}': -{} cards, {} remain",
            player,
            label,
            count,
            active_after
        );
        FilterOutcome::Applied {
            eliminated: count,
            active_after,
        }
    }

    // === Manual bookkeeping ===

    /// Flip one card by hand. Not a question: no score, no log entry.
    pub fn toggle_card(&mut self, index: usize) {
        assert!(
            self.state.phase.guessing_player().is_some(),
            "cards are toggled during a guessing phase"
        );
        let was_possible = self.state.board.is_possible(index);
        self.state.board.set(index, !was_possible);
        self.state.history.push(HistoryAction::Flip(FlipRecord {
            index,
            was_possible,
        }));
        self.events.emit(BoardEvent::Toggled {
            index,
            possible: !was_possible,
        });
    }

    /// Manually adjust a score (scorecard +/- buttons). Floored at 0;
    /// leaves progression, log, and history alone.
    pub fn adjust_score(&mut self, player: Player, delta: i32) {
        self.state.adjust_score(player, delta);
    }

    /// Log a scored event that didn't come from a filter (the "custom
    /// question" button). Counts as one question at the current active
    /// count; undoable like any scored action.
    pub fn log_manual_question(&mut self, label: &str) {
        let player = self
            .state
            .phase
            .guessing_player()
            .expect("questions are logged during a guessing phase");
        let active = self.state.active_count();

        self.state.history.push(HistoryAction::Composite {
            label: label.to_string(),
            flips: SmallVec::new(),
        });
        self.state.push_progression(player, active);
        self.state.question_log.push(QuestionLogEntry {
            label: label.to_string(),
            eliminated: 0,
            active_after: active,
            is_manual: true,
        });
        self.state.add_score(player);
        log::debug!("{} logged manual question '{}'", player, label);
    }

    // === Guessing ===

    /// Submit a free-text guess for the current player's secret.
    ///
    /// Comparison is a case-insensitive exact match on the card name.
    /// The caller validates emptiness/ambiguity before submission.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        let player = self
            .state
            .phase
            .guessing_player()
            .expect("guesses are submitted during a guessing phase");
        let guess = text.trim();
        assert!(!guess.is_empty(), "guess text must be non-empty");

        let target_idx = self
            .state
            .target_of(player)
            .expect("target is set before guessing starts");
        let target_name = &self.catalog.card(target_idx).name;

        if guess.eq_ignore_ascii_case(target_name) {
            log::info!("{} guessed correctly", player);
            self.advance_phase();
            GuessOutcome::Correct
        } else {
            let active_remaining = self.state.active_count();
            self.state.history.push(HistoryAction::Composite {
                label: "Guess: Miss".to_string(),
                flips: SmallVec::new(),
            });
            self.state.push_progression(player, active_remaining);
            self.state.question_log.push(QuestionLogEntry {
                label: "Guess: Miss".to_string(),
                eliminated: 0,
                active_after: active_remaining,
                is_manual: true,
            });
            self.state.add_score(player);
            log::debug!("{} guessed '{}': wrong", player, guess);
            GuessOutcome::Incorrect { active_remaining }
        }
    }

    /// Name suggestions for a partial guess, capped at 5.
    #[must_use]
    pub fn guess_suggestions(&self, partial: &str) -> Vec<usize> {
        let mut matches = self.catalog.search(partial);
        matches.truncate(5);
        matches
    }

    // === Undo ===

    /// Reverse the single most recent action.
    pub fn undo_last_step(&mut self) -> UndoOutcome {
        match self.state.history.pop() {
            Some(action) => {
                self.reverse(action);
                UndoOutcome::Undone
            }
            None => UndoOutcome::Empty,
        }
    }

    /// Reverse one user-facing question: any trailing manual flips,
    /// then the scored action beneath them (if any).
    pub fn undo_full_question(&mut self) -> UndoOutcome {
        if self.state.history.is_empty() {
            return UndoOutcome::Empty;
        }

        while matches!(self.state.history.last(), Some(HistoryAction::Flip(_))) {
            let flip = self.state.history.pop().unwrap();
            self.reverse(flip);
        }
        if let Some(action) = self.state.history.pop() {
            self.reverse(action);
        }
        UndoOutcome::Undone
    }

    /// Exactly invert one recorded action.
    fn reverse(&mut self, action: HistoryAction) {
        let player = self
            .state
            .phase
            .guessing_player()
            .expect("undo happens during a guessing phase");

        match action {
            HistoryAction::Filter { eliminated } => {
                for &i in &eliminated {
                    self.state.board.set(i, true);
                }
                self.events.emit(BoardEvent::Restored {
                    indices: eliminated.to_vec(),
                });
                self.state.dec_score(player);
                self.state.pop_progression(player);
                self.state.question_log.pop();
                log::debug!("undid filter restoring {} cards", eliminated.len());
            }
            HistoryAction::Flip(flip) => {
                self.state.board.set(flip.index, flip.was_possible);
                self.events.emit(BoardEvent::Toggled {
                    index: flip.index,
                    possible: flip.was_possible,
                });
            }
            HistoryAction::Composite { label, flips } => {
                self.state.dec_score(player);
                self.state.pop_progression(player);
                self.state.question_log.pop();
                for flip in flips.iter().rev() {
                    self.state.board.set(flip.index, flip.was_possible);
                    self.events.emit(BoardEvent::Toggled {
                        index: flip.index,
                        possible: flip.was_possible,
                    });
                }
                log::debug!("undid manual event '{}'", label);
            }
        }
    }

    /// Wipe the current guessing run back to its starting state.
    pub fn reset_guessing_phase(&mut self) {
        let player = self
            .state
            .phase
            .guessing_player()
            .expect("reset applies during a guessing phase");
        self.state.begin_guessing(player);
        self.events.emit(BoardEvent::BoardReset);
        log::info!("{} reset their guessing phase", player);
    }

    // === Results ===

    /// Aggregate end-of-game statistics.
    ///
    /// Panics before the `Results` phase.
    #[must_use]
    pub fn results(&self) -> GameResults {
        assert!(
            self.state.phase.is_terminal(),
            "results are computed at the Results phase"
        );
        let total = self.catalog.len();
        let collect = |p: Player| -> Vec<usize> {
            self.state.progression(p).iter().copied().collect()
        };
        stats::GameResults::compute(
            total,
            &collect(Player::P1),
            self.state.score(Player::P1),
            &collect(Player::P2),
            self.state.score(Player::P2),
        )
    }

    /// Direct access to the history stack (for inspection/tests).
    #[must_use]
    pub fn history(&self) -> &HistoryStack {
        &self.state.history
    }
}
