//! Community role classifications.
//!
//! "Swarm", "Tank", and "Spawner" are meta-game concepts that don't
//! exist in the card data itself. They are maintained here as name
//! sets so they can be updated when new cards arrive without touching
//! game logic.

use rustc_hash::FxHashSet;

/// A community-defined card role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Deploys multiple units simultaneously.
    Swarm,
    /// High-HP frontline card.
    Tank,
    /// Continuously spawns additional units.
    Spawner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Swarm => "Swarm",
            Role::Tank => "Tank",
            Role::Spawner => "Spawner",
        };
        f.write_str(s)
    }
}

const SWARM_CARDS: &[&str] = &[
    "Skeletons",
    "Goblins",
    "Spear Goblins",
    "Bats",
    "Minions",
    "Minion Horde",
    "Goblin Gang",
    "Skeleton Barrel",
    "Rascals",
    "Wall Breakers",
    "Skeleton Army",
    "Royal Recruits",
    "Skeleton Dragons",
    "Barbarians",
    "Elite Barbarians",
    "Royal Hogs",
];

const TANK_CARDS: &[&str] = &[
    "Giant",
    "Golem",
    "Lava Hound",
    "P.E.K.K.A",
    "Mega Knight",
    "Electro Giant",
    "Giant Skeleton",
    "Royal Giant",
    "Goblin Giant",
    "Rune Giant",
    "Ice Golem",
    "Elixir Golem",
    "Dark Prince",
    "Prince",
    "Balloon",
];

const SPAWNER_CARDS: &[&str] = &[
    "Tombstone",
    "Goblin Hut",
    "Barbarian Hut",
    "Furnace",
    "Goblin Cage",
    "Night Witch",
    "Witch",
    "Skeleton King",
    "Goblin Drill",
    "Graveyard",
    "Lava Hound",
    "Golem",
    "Giant Skeleton",
];

/// Name sets for each role, matched against `Card::name`.
#[derive(Clone, Debug)]
pub struct RoleSets {
    swarm: FxHashSet<String>,
    tank: FxHashSet<String>,
    spawner: FxHashSet<String>,
}

impl RoleSets {
    /// The bundled classifications.
    #[must_use]
    pub fn bundled() -> Self {
        let to_set = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            swarm: to_set(SWARM_CARDS),
            tank: to_set(TANK_CARDS),
            spawner: to_set(SPAWNER_CARDS),
        }
    }

    /// Whether `name` belongs to `role`.
    #[must_use]
    pub fn has_role(&self, role: Role, name: &str) -> bool {
        match role {
            Role::Swarm => self.swarm.contains(name),
            Role::Tank => self.tank.contains(name),
            Role::Spawner => self.spawner.contains(name),
        }
    }
}

impl Default for RoleSets {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_roles() {
        let roles = RoleSets::bundled();

        assert!(roles.has_role(Role::Swarm, "Skeleton Army"));
        assert!(!roles.has_role(Role::Swarm, "Golem"));

        assert!(roles.has_role(Role::Tank, "Golem"));
        assert!(!roles.has_role(Role::Tank, "Skeletons"));

        // A card can hold more than one role.
        assert!(roles.has_role(Role::Tank, "Lava Hound"));
        assert!(roles.has_role(Role::Spawner, "Lava Hound"));
    }

    #[test]
    fn test_role_names_exist_in_bundled_catalog() {
        let catalog = crate::cards::Catalog::bundled();
        let roles = RoleSets::bundled();

        for name in SWARM_CARDS.iter().chain(TANK_CARDS).chain(SPAWNER_CARDS) {
            assert!(
                catalog.index_of(name).is_some(),
                "role list references unknown card: {}",
                name
            );
        }
        assert!(roles.has_role(Role::Spawner, "Tombstone"));
    }
}
