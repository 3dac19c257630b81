//! Action resolution
//!
//! One call resolves one combatant's committed action against the other.
//! A full turn resolves the player first, then the enemy, and skips the
//! enemy entirely if the player's action already dropped it to zero.
//!
//! Damage is keyed on the (actor action, opponent action) pairing:
//!
//! - attack vs defend: `attack - 2 * defense`; fully blocked attacks are
//!   punished with a counter of half the defender's attack
//! - attack vs attack: `attack - defense`, floored at zero, never a counter
//! - attack vs buff: the target is unguarded and takes `attack * 2`
//!
//! The attack-vs-attack branch deliberately has no counter even at zero
//! damage; the asymmetry with the defend branch is part of the rules.

use crate::combat::archetype::BuffDeltas;
use crate::combat::combatant::{Action, Combatant};

/// What a single resolution did, for narration and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The actor's attack landed for `damage`
    Hit { damage: i32 },
    /// The attack was fully blocked and the defender countered for `counter`
    Blocked { counter: i32 },
    /// The opponent was buffing and took an unguarded critical hit
    Critical { damage: i32 },
    /// The actor braced; nothing happens until it is attacked
    Guarded,
    /// The actor powered up by the returned deltas
    Buffed(BuffDeltas),
    /// The actor had no action committed
    Idle,
}

/// Resolve the actor's committed action against the opponent
///
/// Mutates whichever side the rules say: the opponent on a landed hit or
/// critical, the actor on a counter or a self-buff. Health is not floored
/// here; death detection belongs to the encounter loop.
pub fn resolve(actor: &mut Combatant, opponent: &mut Combatant) -> TurnEvent {
    match actor.action {
        Action::Attack => resolve_attack(actor, opponent),
        Action::Defend => TurnEvent::Guarded,
        Action::Buff => TurnEvent::Buffed(actor.buff()),
        Action::None => TurnEvent::Idle,
    }
}

fn resolve_attack(actor: &mut Combatant, opponent: &mut Combatant) -> TurnEvent {
    match opponent.action {
        Action::Defend => {
            let damage = actor.attack_strength - 2 * opponent.defense_strength;
            if damage <= 0 {
                // Fully blocked: the defender retaliates with half its own
                // attack. Zero or negative damage never heals.
                let counter = opponent.attack_strength / 2;
                actor.take_damage(counter);
                TurnEvent::Blocked { counter }
            } else {
                opponent.take_damage(damage);
                TurnEvent::Hit { damage }
            }
        }
        Action::Buff => {
            // Buffing forfeits any guard, so the hit ignores defense
            let damage = actor.attack_strength * 2;
            opponent.take_damage(damage);
            TurnEvent::Critical { damage }
        }
        Action::Attack | Action::None => {
            let damage = (actor.attack_strength - opponent.defense_strength).max(0);
            opponent.take_damage(damage);
            TurnEvent::Hit { damage }
        }
    }
}
