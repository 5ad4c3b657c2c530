//! Card system: records, the session catalog, and role classifications.
//!
//! ## Key Types
//!
//! - `Card`: Static card data (name, elixir, rarity, type, traits)
//! - `Catalog`: Fixed, ordered card set - the board's index space
//! - `RoleSets`: Community swarm/tank/spawner classifications

pub mod card;
pub mod catalog;
pub mod roles;

pub use card::{Card, CardType, Rarity, TargetMode};
pub use catalog::Catalog;
pub use roles::{Role, RoleSets};
