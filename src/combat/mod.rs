//! The combat core: combatant model, archetype tables, action resolution

pub mod archetype;
pub mod combatant;
pub mod resolution;

pub use archetype::{Archetype, BaseStats, BuffDeltas, ENEMY_ROSTER, HERO_ROSTER};
pub use combatant::{Action, Combatant};
pub use resolution::{resolve, TurnEvent};
