//! Full game-flow integration tests.
//!
//! Drives the engine through the whole phase machine the way a
//! frontend would: pick both secrets, run both guessing phases
//! back-to-back with no animation waits, then read results.

use guess_royale::{
    Card, CardType, Catalog, FilterOutcome, GameEngine, GuessOutcome, Phase, Player, Rarity,
    TargetMode,
};

fn card(name: &str, elixir: u8, rarity: Rarity) -> Card {
    Card {
        name: name.to_string(),
        rarity,
        elixir,
        card_type: CardType::Troop,
        target: TargetMode::Ground,
        has_evo: false,
        has_hero: false,
        flying: false,
        is_goblin: false,
        is_undead: false,
        is_man: false,
        is_human: false,
    }
}

/// Five cards A..E, all commons, elixir 1..5.
fn five_card_catalog() -> Catalog {
    Catalog::new(vec![
        card("A", 1, Rarity::Common),
        card("B", 2, Rarity::Common),
        card("C", 3, Rarity::Common),
        card("D", 4, Rarity::Common),
        card("E", 5, Rarity::Common),
    ])
}

/// Run a fresh game to `GuessP1` with "C" as both targets.
fn start_guessing() -> GameEngine {
    let mut engine = GameEngine::new(five_card_catalog());
    assert_eq!(engine.phase(), Phase::Start);

    engine.advance_phase();
    assert_eq!(engine.phase(), Phase::PickP1);
    engine.select_secret(2);

    engine.advance_phase();
    assert_eq!(engine.phase(), Phase::PickP2);
    engine.select_secret(2);

    engine.advance_phase();
    assert_eq!(engine.phase(), Phase::GuessP1);
    engine
}

// =============================================================================
// Phase machine
// =============================================================================

/// Secrets land on the opponent's seat.
#[test]
fn test_secrets_are_opponent_targets() {
    let engine = start_guessing();
    assert_eq!(engine.secret_of(Player::P1).unwrap().name, "C");
    assert_eq!(engine.secret_of(Player::P2).unwrap().name, "C");
}

/// Entering a guessing phase resets board, score, and bookkeeping.
#[test]
fn test_guess_phase_entry_resets() {
    let engine = start_guessing();
    assert_eq!(engine.state().active_count(), 5);
    assert_eq!(engine.state().score(Player::P1), 0);
    assert!(engine.state().progression(Player::P1).is_empty());
    assert!(engine.state().history.is_empty());
    assert!(engine.state().question_log.is_empty());
    assert_eq!(engine.current_player(), Player::P1);
}

#[test]
#[should_panic(expected = "cannot advance past")]
fn test_no_transitions_out_of_results() {
    let mut engine = start_guessing();
    engine.submit_guess("C"); // -> GuessP2
    engine.submit_guess("C"); // -> Results
    assert_eq!(engine.phase(), Phase::Results);
    engine.advance_phase();
}

// =============================================================================
// Spec scenarios
// =============================================================================

/// Filter keeping only {C, D}: board [F,F,T,T,F], score 1,
/// progression [2]; undo restores everything.
#[test]
fn test_filter_then_undo_scenario() {
    let mut engine = start_guessing();

    let outcome = engine.apply_filter(|c| c.name == "C" || c.name == "D", "shortlist");

    assert_eq!(
        outcome,
        FilterOutcome::Applied {
            eliminated: 3,
            active_after: 2
        }
    );
    assert_eq!(
        engine.state().board.slots(),
        &[false, false, true, true, false]
    );
    assert_eq!(engine.state().score(Player::P1), 1);
    assert_eq!(
        engine.state().progression(Player::P1).iter().copied().collect::<Vec<_>>(),
        vec![2]
    );

    engine.undo_last_step();

    assert_eq!(engine.state().board.slots(), &[true; 5]);
    assert_eq!(engine.state().score(Player::P1), 0);
    assert!(engine.state().progression(Player::P1).is_empty());
}

/// Case-insensitive correct guess advances the phase without scoring.
#[test]
fn test_correct_guess_case_insensitive() {
    let mut engine = start_guessing();

    assert_eq!(engine.submit_guess("c"), GuessOutcome::Correct);
    assert_eq!(engine.phase(), Phase::GuessP2);
    assert_eq!(engine.state().score(Player::P1), 0);
    assert_eq!(engine.current_player(), Player::P2);
}

/// Wrong guess: +1 question, progression entry at the unchanged
/// active count, phase unchanged.
#[test]
fn test_wrong_guess_scores() {
    let mut engine = start_guessing();
    engine.apply_filter(|c| c.elixir >= 3, "Elixir \u{2265} 3");

    let outcome = engine.submit_guess("b");

    assert_eq!(
        outcome,
        GuessOutcome::Incorrect {
            active_remaining: 3
        }
    );
    assert_eq!(engine.phase(), Phase::GuessP1);
    assert_eq!(engine.state().score(Player::P1), 2);
    assert_eq!(
        engine.state().progression(Player::P1).iter().copied().collect::<Vec<_>>(),
        vec![3, 3]
    );
    let last = engine.state().question_log.last().unwrap();
    assert_eq!(last.label, "Guess: Miss");
    assert!(last.is_manual);
}

// =============================================================================
// Independent guessing phases
// =============================================================================

/// Each seat starts from the full catalog; the first seat's results
/// survive into the second phase.
#[test]
fn test_phases_are_independent_and_comparable() {
    let mut engine = start_guessing();

    engine.apply_filter(|c| c.elixir >= 3, "Elixir \u{2265} 3");
    engine.apply_filter(|c| c.name == "C", "exact");
    assert_eq!(engine.state().score(Player::P1), 2);
    engine.submit_guess("C");

    // P2's phase: fresh board, their own counters.
    assert_eq!(engine.phase(), Phase::GuessP2);
    assert_eq!(engine.state().active_count(), 5);
    assert_eq!(engine.state().score(Player::P2), 0);
    assert!(engine.state().history.is_empty());

    engine.apply_filter(|c| c.name == "C", "one shot");
    engine.submit_guess("C");
    assert_eq!(engine.phase(), Phase::Results);

    // P1's totals were not disturbed by P2's run.
    assert_eq!(engine.state().score(Player::P1), 2);
    assert_eq!(engine.state().score(Player::P2), 1);
}

// =============================================================================
// Results
// =============================================================================

/// Aggregate statistics come straight from scores and progressions.
#[test]
fn test_results_summaries() {
    let mut engine = start_guessing();

    engine.apply_filter(|c| c.elixir >= 3, "Elixir \u{2265} 3"); // 5 -> 3
    engine.submit_guess("C");

    engine.apply_filter(|c| c.name == "C", "exact"); // 5 -> 1
    engine.submit_guess("C");

    let results = engine.results();
    assert_eq!(results.winner, None); // 1 question each

    let p1 = &results.summaries[Player::P1];
    assert_eq!(p1.questions, 1);
    assert_eq!(p1.eliminated, 2);
    assert_eq!(p1.cards_left, 3);
    assert_eq!(p1.best_question, 2);

    let p2 = &results.summaries[Player::P2];
    assert_eq!(p2.eliminated, 4);
    assert_eq!(p2.best_question, 4);
    assert_eq!(p2.efficiency_pct, 80);
    assert_eq!(p2.first_below_5, Some(1));
}

/// Fewer questions wins.
#[test]
fn test_winner_is_lower_score() {
    let mut engine = start_guessing();

    engine.apply_filter(|c| c.elixir >= 2, "q1");
    engine.apply_filter(|c| c.elixir >= 3, "q2");
    engine.submit_guess("C");

    engine.apply_filter(|c| c.name == "C", "q1");
    engine.submit_guess("C");

    let results = engine.results();
    assert_eq!(results.winner, Some(Player::P2));
}

// =============================================================================
// Bundled dataset smoke test
// =============================================================================

/// The shipped catalog plays end-to-end.
#[test]
fn test_bundled_game_smoke() {
    let mut engine = GameEngine::bundled();
    let total = engine.catalog().len();
    let secret = engine.catalog().index_of("Knight").unwrap();

    engine.advance_phase();
    engine.select_secret(secret);
    engine.advance_phase();
    engine.select_secret(secret);
    engine.advance_phase();

    let outcome = engine.apply_filter(|c| c.card_type == CardType::Troop, "Type: Troop");
    let FilterOutcome::Applied { active_after, .. } = outcome else {
        panic!("troop filter must eliminate spells and buildings");
    };
    assert!(active_after < total);

    assert_eq!(engine.submit_guess("knight"), GuessOutcome::Correct);
    assert_eq!(engine.phase(), Phase::GuessP2);
}

/// Game state snapshots round-trip through serde.
#[test]
fn test_state_snapshot_roundtrip() {
    let mut engine = start_guessing();
    engine.apply_filter(|c| c.elixir > 2, "Elixir > 2");
    engine.toggle_card(0);

    let json = serde_json::to_string(engine.state()).unwrap();
    let restored: guess_royale::GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.board, engine.state().board);
    assert_eq!(restored.phase, engine.state().phase);
    assert_eq!(restored.history.len(), engine.state().history.len());
}
