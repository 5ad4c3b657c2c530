//! Declarative question filters.
//!
//! A `FilterSpec` is the data form of a question: "is your card a
//! Spell?", "does it cost more than 4 elixir?". Each spec knows how to
//! test a card and how to label itself for the question log. Keeping
//! filters as data (rather than UI-wired closures) lets any frontend
//! map its controls onto them, and lets tests enumerate them.
//!
//! The engine also accepts raw predicates; specs are the catalogued
//! vocabulary a typical frontend exposes.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType, Rarity, Role, RoleSets, TargetMode};

/// Comparison operator for elixir-cost filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElixirCmp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl ElixirCmp {
    /// Apply the comparison.
    #[must_use]
    pub fn test(self, cost: u8, against: u8) -> bool {
        match self {
            ElixirCmp::Eq => cost == against,
            ElixirCmp::Lt => cost < against,
            ElixirCmp::Gt => cost > against,
            ElixirCmp::Le => cost <= against,
            ElixirCmp::Ge => cost >= against,
        }
    }

    /// Display symbol for labels.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            ElixirCmp::Eq => "=",
            ElixirCmp::Lt => "<",
            ElixirCmp::Gt => ">",
            ElixirCmp::Le => "\u{2264}",
            ElixirCmp::Ge => "\u{2265}",
        }
    }
}

/// A boolean trait stored directly on the card record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTrait {
    Flying,
    Evolution,
    HeroSkin,
    Goblin,
    Undead,
    Man,
    Human,
}

impl CardTrait {
    /// Read this trait off a card.
    #[must_use]
    pub fn of(self, card: &Card) -> bool {
        match self {
            CardTrait::Flying => card.flying,
            CardTrait::Evolution => card.has_evo,
            CardTrait::HeroSkin => card.has_hero,
            CardTrait::Goblin => card.is_goblin,
            CardTrait::Undead => card.is_undead,
            CardTrait::Man => card.is_man,
            CardTrait::Human => card.is_human,
        }
    }
}

impl std::fmt::Display for CardTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CardTrait::Flying => "Flying",
            CardTrait::Evolution => "Evolution",
            CardTrait::HeroSkin => "Hero",
            CardTrait::Goblin => "Goblin",
            CardTrait::Undead => "Undead",
            CardTrait::Man => "Man",
            CardTrait::Human => "Human",
        };
        f.write_str(s)
    }
}

/// A complete, labelled question.
///
/// Cards *matching* the spec survive; non-matching cards are
/// eliminated when the filter is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSpec {
    Rarity(Rarity),
    CardType(CardType),
    Target(TargetMode),
    Elixir(ElixirCmp, u8),
    /// Card trait equals the given answer (`false` = "No" questions).
    Trait(CardTrait, bool),
    /// Community role membership equals the given answer.
    Role(Role, bool),
}

impl FilterSpec {
    /// Whether `card` matches (survives) this filter.
    #[must_use]
    pub fn matches(&self, card: &Card, roles: &RoleSets) -> bool {
        match self {
            FilterSpec::Rarity(r) => card.rarity == *r,
            FilterSpec::CardType(t) => card.card_type == *t,
            FilterSpec::Target(t) => card.target == *t,
            FilterSpec::Elixir(cmp, n) => cmp.test(card.elixir, *n),
            FilterSpec::Trait(tr, yes) => tr.of(card) == *yes,
            FilterSpec::Role(role, yes) => roles.has_role(*role, &card.name) == *yes,
        }
    }

    /// Question-log label.
    #[must_use]
    pub fn label(&self) -> String {
        let yes_no = |v: bool| if v { "Yes" } else { "No" };
        match self {
            FilterSpec::Rarity(r) => format!("Rarity: {}", r),
            FilterSpec::CardType(t) => format!("Type: {}", t),
            FilterSpec::Target(t) => format!("Target: {}", t),
            FilterSpec::Elixir(cmp, n) => format!("Elixir {} {}", cmp.symbol(), n),
            FilterSpec::Trait(tr, v) => format!("{}: {}", tr, yes_no(*v)),
            FilterSpec::Role(role, v) => format!("{}: {}", role, yes_no(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    #[test]
    fn test_elixir_cmp() {
        assert!(ElixirCmp::Eq.test(4, 4));
        assert!(ElixirCmp::Lt.test(3, 4));
        assert!(ElixirCmp::Gt.test(5, 4));
        assert!(ElixirCmp::Le.test(4, 4));
        assert!(ElixirCmp::Ge.test(4, 4));
        assert!(!ElixirCmp::Gt.test(4, 4));
    }

    #[test]
    fn test_trait_filter() {
        let catalog = Catalog::bundled();
        let roles = RoleSets::bundled();
        let bats = catalog.card(catalog.index_of("Bats").unwrap());

        assert!(FilterSpec::Trait(CardTrait::Flying, true).matches(bats, &roles));
        assert!(!FilterSpec::Trait(CardTrait::Flying, false).matches(bats, &roles));
        assert!(!FilterSpec::Trait(CardTrait::Goblin, true).matches(bats, &roles));
    }

    #[test]
    fn test_role_filter() {
        let catalog = Catalog::bundled();
        let roles = RoleSets::bundled();
        let golem = catalog.card(catalog.index_of("Golem").unwrap());

        assert!(FilterSpec::Role(Role::Tank, true).matches(golem, &roles));
        assert!(FilterSpec::Role(Role::Swarm, false).matches(golem, &roles));
    }

    #[test]
    fn test_rarity_and_type_filters() {
        let catalog = Catalog::bundled();
        let roles = RoleSets::bundled();
        let log = catalog.card(catalog.index_of("The Log").unwrap());

        assert!(FilterSpec::Rarity(Rarity::Legendary).matches(log, &roles));
        assert!(FilterSpec::CardType(CardType::Spell).matches(log, &roles));
        assert!(!FilterSpec::CardType(CardType::Troop).matches(log, &roles));
    }

    #[test]
    fn test_labels() {
        assert_eq!(FilterSpec::Rarity(Rarity::Epic).label(), "Rarity: Epic");
        assert_eq!(
            FilterSpec::Elixir(ElixirCmp::Ge, 4).label(),
            "Elixir \u{2265} 4"
        );
        assert_eq!(
            FilterSpec::Trait(CardTrait::Flying, false).label(),
            "Flying: No"
        );
        assert_eq!(FilterSpec::Role(Role::Tank, true).label(), "Tank: Yes");
        assert_eq!(
            FilterSpec::Target(TargetMode::AirAndGround).label(),
            "Target: Air & Ground"
        );
    }
}
