//! Card records - static, immutable card data.
//!
//! A `Card` holds everything the deduction game can ask about:
//! elixir cost, rarity, type, target mode, and a set of independent
//! boolean traits. Cards never change once the catalog is loaded;
//! identity is the `name` field.

use serde::{Deserialize, Serialize};

/// Card rarity, ordered from most to least common.
///
/// The derived `Ord` matches the display sort order:
/// Common < Rare < Epic < Legendary < Champion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Champion => "Champion",
        };
        f.write_str(s)
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Troop,
    Spell,
    Building,
}

impl CardType {
    /// Position in the display sort order (Spell < Building < Troop).
    #[must_use]
    pub const fn display_order(self) -> u8 {
        match self {
            CardType::Spell => 0,
            CardType::Building => 1,
            CardType::Troop => 2,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CardType::Troop => "Troop",
            CardType::Spell => "Spell",
            CardType::Building => "Building",
        };
        f.write_str(s)
    }
}

/// What a card can attack, as an opaque display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMode {
    Ground,
    #[serde(rename = "Air & Ground")]
    AirAndGround,
    Buildings,
    None,
}

impl std::fmt::Display for TargetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TargetMode::Ground => "Ground",
            TargetMode::AirAndGround => "Air & Ground",
            TargetMode::Buildings => "Buildings",
            TargetMode::None => "None",
        };
        f.write_str(s)
    }
}

/// A single card record.
///
/// Immutable once loaded; the name is the functional key.
/// An elixir cost of 0 means "variable".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique human-readable name.
    pub name: String,

    pub rarity: Rarity,

    /// Elixir cost; 0 means variable cost.
    pub elixir: u8,

    pub card_type: CardType,

    pub target: TargetMode,

    /// Has an evolution variant.
    pub has_evo: bool,

    /// Has a hero skin.
    pub has_hero: bool,

    /// Is a flying unit.
    pub flying: bool,

    // Identity/role classifications.
    pub is_goblin: bool,
    pub is_undead: bool,
    pub is_man: bool,
    pub is_human: bool,
}

impl Card {
    /// Whether the elixir cost is variable (displayed as "?").
    #[must_use]
    pub fn is_variable_cost(&self) -> bool {
        self.elixir == 0
    }
}
