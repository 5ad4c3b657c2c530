//! End-of-game statistics.
//!
//! Derived from each seat's final score and progression series at the
//! `Results` phase. The progression series holds the active-card count
//! after each question; every derivation below prefixes it with the
//! full catalog size so "question 1" has a baseline to diff against.

use serde::{Deserialize, Serialize};

use crate::game::{PerPlayer, Player};

/// Which direction wins when comparing a metric between the seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Better {
    Lower,
    Higher,
}

/// Derived statistics for one seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Final question count.
    pub questions: u32,

    /// Total cards eliminated across the run.
    pub eliminated: usize,

    /// Cards still possible when the run ended.
    pub cards_left: usize,

    /// Largest drop between consecutive progression entries.
    pub best_question: i64,

    /// Mean cards eliminated per question; None when no questions
    /// moved the board.
    pub avg_per_question: Option<f64>,

    /// Eliminated share of the catalog, rounded to whole percent.
    pub efficiency_pct: u32,

    /// 1-based question number after which fewer than 10 cards
    /// remained, if ever.
    pub first_below_10: Option<usize>,

    /// 1-based question number after which fewer than 5 cards
    /// remained, if ever.
    pub first_below_5: Option<usize>,
}

/// Compute one seat's summary from the catalog size, their progression
/// series, and their final score.
#[must_use]
pub fn summarize(total: usize, progression: &[usize], questions: u32) -> PlayerSummary {
    if progression.is_empty() {
        return PlayerSummary {
            questions,
            eliminated: 0,
            cards_left: total,
            best_question: 0,
            avg_per_question: None,
            efficiency_pct: 0,
            first_below_10: None,
            first_below_5: None,
        };
    }

    let last = *progression.last().unwrap();
    let eliminated = total.saturating_sub(last);

    let mut prev = total as i64;
    let mut best = i64::MIN;
    for &v in progression {
        best = best.max(prev - v as i64);
        prev = v as i64;
    }

    let first_at = |threshold: usize| {
        progression
            .iter()
            .position(|&v| v < threshold)
            .map(|i| i + 1)
    };

    PlayerSummary {
        questions,
        eliminated,
        cards_left: last,
        best_question: best,
        avg_per_question: Some(eliminated as f64 / progression.len() as f64),
        efficiency_pct: ((eliminated as f64 / total as f64) * 100.0).round() as u32,
        first_below_10: first_at(10),
        first_below_5: first_at(5),
    }
}

/// Both seats' summaries plus the winner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResults {
    pub summaries: PerPlayer<PlayerSummary>,
    /// Lower score wins; None is a draw.
    pub winner: Option<Player>,
}

impl GameResults {
    /// Compute results from both seats' final series and scores.
    #[must_use]
    pub fn compute(
        total: usize,
        progression_p1: &[usize],
        score_p1: u32,
        progression_p2: &[usize],
        score_p2: u32,
    ) -> Self {
        Self {
            summaries: PerPlayer::new(|p| match p {
                Player::P1 => summarize(total, progression_p1, score_p1),
                Player::P2 => summarize(total, progression_p2, score_p2),
            }),
            winner: winner(score_p1, score_p2),
        }
    }
}

/// Winner by final score (fewer questions wins); None is a draw.
#[must_use]
pub fn winner(score_p1: u32, score_p2: u32) -> Option<Player> {
    match score_p1.cmp(&score_p2) {
        std::cmp::Ordering::Less => Some(Player::P1),
        std::cmp::Ordering::Greater => Some(Player::P2),
        std::cmp::Ordering::Equal => None,
    }
}

/// Which seat leads on a metric, or None on a tie.
#[must_use]
pub fn leader(direction: Better, p1: f64, p2: f64) -> Option<Player> {
    if p1 == p2 {
        return None;
    }
    let p1_wins = match direction {
        Better::Lower => p1 < p2,
        Better::Higher => p1 > p2,
    };
    Some(if p1_wins { Player::P1 } else { Player::P2 })
}

/// Graph-ready series: both progressions prefixed with the catalog
/// size and padded to equal length with their final value.
#[must_use]
pub fn padded_series(
    total: usize,
    progression_p1: &[usize],
    progression_p2: &[usize],
) -> (Vec<usize>, Vec<usize>) {
    let mut s1: Vec<usize> = std::iter::once(total)
        .chain(progression_p1.iter().copied())
        .collect();
    let mut s2: Vec<usize> = std::iter::once(total)
        .chain(progression_p2.iter().copied())
        .collect();

    let len = s1.len().max(s2.len()).max(2);
    while s1.len() < len {
        s1.push(*s1.last().unwrap());
    }
    while s2.len() < len {
        s2.push(*s2.last().unwrap());
    }
    (s1, s2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progression() {
        let s = summarize(100, &[], 2);
        assert_eq!(s.questions, 2);
        assert_eq!(s.eliminated, 0);
        assert_eq!(s.cards_left, 100);
        assert_eq!(s.best_question, 0);
        assert_eq!(s.avg_per_question, None);
        assert_eq!(s.efficiency_pct, 0);
        assert_eq!(s.first_below_10, None);
    }

    #[test]
    fn test_basic_derivations() {
        // 100 -> 40 -> 12 -> 4
        let s = summarize(100, &[40, 12, 4], 3);
        assert_eq!(s.eliminated, 96);
        assert_eq!(s.cards_left, 4);
        assert_eq!(s.best_question, 60);
        assert_eq!(s.avg_per_question, Some(32.0));
        assert_eq!(s.efficiency_pct, 96);
        assert_eq!(s.first_below_10, Some(3));
        assert_eq!(s.first_below_5, Some(3));
    }

    #[test]
    fn test_thresholds_count_from_one() {
        let s = summarize(20, &[9, 8], 2);
        assert_eq!(s.first_below_10, Some(1));
        assert_eq!(s.first_below_5, None);
    }

    #[test]
    fn test_flat_entries_from_missed_guesses() {
        // A missed guess appends the unchanged count: diff of zero.
        let s = summarize(10, &[6, 6], 2);
        assert_eq!(s.best_question, 4);
        assert_eq!(s.eliminated, 4);
        assert_eq!(s.avg_per_question, Some(2.0));
    }

    #[test]
    fn test_winner_by_lower_score() {
        assert_eq!(winner(3, 5), Some(Player::P1));
        assert_eq!(winner(7, 2), Some(Player::P2));
        assert_eq!(winner(4, 4), None);
    }

    #[test]
    fn test_leader_directions() {
        assert_eq!(leader(Better::Lower, 3.0, 5.0), Some(Player::P1));
        assert_eq!(leader(Better::Higher, 3.0, 5.0), Some(Player::P2));
        assert_eq!(leader(Better::Higher, 4.0, 4.0), None);
    }

    #[test]
    fn test_padded_series() {
        let (s1, s2) = padded_series(50, &[30, 10], &[25]);
        assert_eq!(s1, vec![50, 30, 10]);
        assert_eq!(s2, vec![50, 25, 25]);
    }

    #[test]
    fn test_padded_series_empty_runs() {
        let (s1, s2) = padded_series(50, &[], &[]);
        assert_eq!(s1, vec![50, 50]);
        assert_eq!(s2, vec![50, 50]);
    }

    #[test]
    fn test_results_compute() {
        let results = GameResults::compute(10, &[5], 1, &[4, 2], 2);
        assert_eq!(results.winner, Some(Player::P1));
        assert_eq!(results.summaries[Player::P2].eliminated, 8);
    }
}
