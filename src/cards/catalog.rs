//! Card catalog - the fixed, ordered card set for a session.
//!
//! The `Catalog` stores all cards in a fixed order. Positions in that
//! order are the index space the elimination board is aligned with, so
//! the catalog is created once at game start and never mutated during
//! play. Name lookup is case-insensitive.

use rustc_hash::FxHashMap;

use super::card::Card;

/// Bundled card dataset, shipped with the crate as JSON.
const BUNDLED_CARDS: &str = include_str!("data/cards.json");

/// Immutable, ordered card collection with name lookup.
///
/// ## Example
///
/// ```
/// use guess_royale::cards::Catalog;
///
/// let catalog = Catalog::bundled();
/// let idx = catalog.index_of("the log").unwrap();
/// assert_eq!(catalog.card(idx).name, "The Log");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    /// Lowercased name -> position.
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from an ordered card list.
    ///
    /// Panics if two cards share a name (names are the functional key)
    /// or the list is empty.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "Catalog must contain at least one card");

        let mut by_name = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            let prev = by_name.insert(card.name.to_lowercase(), i);
            assert!(prev.is_none(), "Duplicate card name: {}", card.name);
        }

        Self { cards, by_name }
    }

    /// Load the bundled card dataset.
    #[must_use]
    pub fn bundled() -> Self {
        let cards: Vec<Card> =
            serde_json::from_str(BUNDLED_CARDS).expect("bundled card dataset is valid JSON");
        Self::new(cards)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty (never true for a constructed catalog).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    ///
    /// Panics on an out-of-range index: the board and catalog are
    /// always index-aligned, so a bad index is a caller bug.
    #[must_use]
    pub fn card(&self, index: usize) -> &Card {
        assert!(index < self.cards.len(), "Card index {} out of range", index);
        &self.cards[index]
    }

    /// Get a card by position, or None if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Find a card's position by name (case-insensitive exact match).
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Positions of cards whose name contains `query` (case-insensitive).
    ///
    /// Returns positions in catalog order. An empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }
}
