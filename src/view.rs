//! Board display projections.
//!
//! Pure functions from catalog + board + preferences to the index
//! sequences a renderer paints, plus the preference types themselves.
//! Nothing here mutates game state.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Catalog;

/// Sort key for the board grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Default,
    Name,
    Elixir,
    Rarity,
    CardType,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub const fn toggled(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Which cards the board shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewFilter {
    #[default]
    All,
    ActiveOnly,
}

/// Display preferences held in game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPrefs {
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub view_filter: ViewFilter,
}

/// Urgency level of the active-card counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountLevel {
    Normal,
    /// 15 or fewer cards remain.
    Low,
    /// 5 or fewer cards remain.
    VeryLow,
}

/// Classify an active count for the counter pill.
#[must_use]
pub fn count_level(active: usize) -> CountLevel {
    if active <= 5 {
        CountLevel::VeryLow
    } else if active <= 15 {
        CountLevel::Low
    } else {
        CountLevel::Normal
    }
}

/// Catalog positions in display order under `prefs`.
///
/// Ties break by name; `Desc` reverses the whole comparison,
/// tie-break included.
#[must_use]
pub fn sorted_indices(catalog: &Catalog, prefs: &ViewPrefs) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..catalog.len()).collect();
    if prefs.sort_key == SortKey::Default {
        return indices;
    }

    indices.sort_by(|&a, &b| {
        let ca = catalog.card(a);
        let cb = catalog.card(b);
        let cmp = match prefs.sort_key {
            SortKey::Default => std::cmp::Ordering::Equal,
            SortKey::Name => ca.name.cmp(&cb.name),
            SortKey::Elixir => ca.elixir.cmp(&cb.elixir),
            SortKey::Rarity => ca.rarity.cmp(&cb.rarity),
            SortKey::CardType => ca
                .card_type
                .display_order()
                .cmp(&cb.card_type.display_order()),
        };
        let cmp = cmp.then_with(|| ca.name.cmp(&cb.name));
        match prefs.sort_dir {
            SortDir::Asc => cmp,
            SortDir::Desc => cmp.reverse(),
        }
    });
    indices
}

/// Display positions after applying the view filter.
#[must_use]
pub fn visible_indices(catalog: &Catalog, board: &Board, prefs: &ViewPrefs) -> Vec<usize> {
    let sorted = sorted_indices(catalog, prefs);
    match prefs.view_filter {
        ViewFilter::All => sorted,
        ViewFilter::ActiveOnly => sorted
            .into_iter()
            .filter(|&i| board.is_possible(i))
            .collect(),
    }
}
