//! Game phases and the two player seats.
//!
//! The phase machine is strictly linear:
//! `Start -> PickP1 -> PickP2 -> GuessP1 -> GuessP2 -> Results`.
//! There are no back-transitions; a new game means a fresh engine.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// 0-based index for storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::P1 => f.write_str("Player 1"),
            Player::P2 => f.write_str("Player 2"),
        }
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::P1), factory(Player::P2)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [Player::P1, Player::P2].into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A stage of the linear game state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    PickP1,
    PickP2,
    GuessP1,
    GuessP2,
    Results,
}

impl Phase {
    /// The following phase, or None from `Results`.
    #[must_use]
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Start => Some(Phase::PickP1),
            Phase::PickP1 => Some(Phase::PickP2),
            Phase::PickP2 => Some(Phase::GuessP1),
            Phase::GuessP1 => Some(Phase::GuessP2),
            Phase::GuessP2 => Some(Phase::Results),
            Phase::Results => None,
        }
    }

    /// The seat picking a secret in this phase, if any.
    #[must_use]
    pub const fn picking_player(self) -> Option<Player> {
        match self {
            Phase::PickP1 => Some(Player::P1),
            Phase::PickP2 => Some(Player::P2),
            _ => None,
        }
    }

    /// The seat asking questions in this phase, if any.
    #[must_use]
    pub const fn guessing_player(self) -> Option<Player> {
        match self {
            Phase::GuessP1 => Some(Player::P1),
            Phase::GuessP2 => Some(Player::P2),
            _ => None,
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Results)
    }
}
