//! Hero and enemy archetypes
//!
//! Each archetype is a row in two fixed tables: base stats and buff deltas.
//! Buffing is a pure delta application, not per-class behavior, so the
//! resolver works for any stat tuple.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Base stat tuple an archetype starts a campaign with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub attack: i32,
    pub defense: i32,
    pub max_health: i32,
}

/// Stat increases applied by one buff action
///
/// All deltas are non-negative; there are no de-buffs. A health delta raises
/// both current and maximum health, so restoring between encounters refills
/// to the buffed maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuffDeltas {
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
}

/// Character archetype (hero classes and enemy species)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Archetype {
    #[display(fmt = "Mage")]
    Mage,
    #[display(fmt = "Warrior")]
    Warrior,
    #[display(fmt = "Archer")]
    Archer,
    #[display(fmt = "Goblin")]
    Goblin,
    #[display(fmt = "Orc")]
    Orc,
    #[display(fmt = "Dragon")]
    Dragon,
}

/// The playable hero classes, in menu order
pub const HERO_ROSTER: [Archetype; 3] = [Archetype::Mage, Archetype::Warrior, Archetype::Archer];

/// The campaign's enemy sequence, weakest to strongest
pub const ENEMY_ROSTER: [Archetype; 3] = [Archetype::Goblin, Archetype::Orc, Archetype::Dragon];

impl Archetype {
    pub fn is_hero(self) -> bool {
        matches!(self, Archetype::Mage | Archetype::Warrior | Archetype::Archer)
    }

    /// Starting stats for this archetype
    pub fn base_stats(self) -> BaseStats {
        match self {
            Archetype::Mage => BaseStats { attack: 15, defense: 6, max_health: 40 },
            Archetype::Warrior => BaseStats { attack: 4, defense: 10, max_health: 55 },
            Archetype::Archer => BaseStats { attack: 12, defense: 8, max_health: 48 },
            Archetype::Goblin => BaseStats { attack: 8, defense: 2, max_health: 25 },
            Archetype::Orc => BaseStats { attack: 12, defense: 5, max_health: 40 },
            Archetype::Dragon => BaseStats { attack: 18, defense: 8, max_health: 60 },
        }
    }

    /// Fixed stat increases granted by this archetype's buff action
    pub fn buff_deltas(self) -> BuffDeltas {
        match self {
            Archetype::Mage => BuffDeltas { attack: 7, defense: 0, health: 7 },
            Archetype::Warrior => BuffDeltas { attack: 1, defense: 1, health: 4 },
            Archetype::Archer => BuffDeltas { attack: 4, defense: 4, health: 0 },
            // Enemies share a generic power-up
            Archetype::Goblin | Archetype::Orc | Archetype::Dragon => {
                BuffDeltas { attack: 2, defense: 2, health: 2 }
            }
        }
    }

    /// Narration line used when this archetype buffs
    pub fn buff_flavor(self) -> &'static str {
        match self {
            Archetype::Mage => "channels arcane power",
            Archetype::Warrior => "roars in fury",
            Archetype::Archer => "sharpens awareness",
            Archetype::Goblin => "snarls and bristles",
            Archetype::Orc => "beats its chest",
            Archetype::Dragon => "spreads its wings and bellows",
        }
    }
}
