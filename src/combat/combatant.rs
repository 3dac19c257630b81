//! Combatant state and per-turn action selection

use std::str::FromStr;

use derive_more::Display;
use rand::Rng;

use crate::combat::archetype::{Archetype, BuffDeltas};
use crate::core::error::GameError;

/// Action a combatant commits to for one turn
///
/// `None` marks the selection phase before an action is chosen; resolution
/// treats it as doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Action {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "attack")]
    Attack,
    #[display(fmt = "defend")]
    Defend,
    #[display(fmt = "buff")]
    Buff,
}

impl Action {
    /// Uniform random choice among the three real actions
    ///
    /// Enemies pick their action through this; pass a seeded RNG for
    /// deterministic behavior.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Action::Attack,
            1 => Action::Defend,
            _ => Action::Buff,
        }
    }
}

impl FromStr for Action {
    type Err = GameError;

    /// Accepts "attack", "defend", or "buff", case-insensitively.
    /// "none" is not valid player input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" => Ok(Action::Attack),
            "defend" => Ok(Action::Defend),
            "buff" => Ok(Action::Buff),
            other => Err(GameError::InvalidAction(other.to_string())),
        }
    }
}

/// A character in a battle: hero or enemy
///
/// Health carries no floor clamp; it may go negative during a resolution
/// step. The encounter loop treats `health <= 0` as dead. Attack and defense
/// only ever increase (buffs), never decrease.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub archetype: Archetype,
    pub health: i32,
    pub max_health: i32,
    pub attack_strength: i32,
    pub defense_strength: i32,
    pub action: Action,
}

impl Combatant {
    /// Create a combatant with the archetype's table stats
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let base = archetype.base_stats();
        Self::with_stats(name, archetype, base.attack, base.defense, base.max_health)
    }

    /// Create a combatant with an arbitrary stat tuple
    ///
    /// The resolver makes no assumptions about the tuple, so scenarios
    /// outside the archetype tables are fair game.
    pub fn with_stats(
        name: impl Into<String>,
        archetype: Archetype,
        attack: i32,
        defense: i32,
        max_health: i32,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            health: max_health,
            max_health,
            attack_strength: attack,
            defense_strength: defense,
            action: Action::None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Refill health to the current (buffed) maximum
    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }

    /// Clear the chosen action ahead of a new selection phase
    pub fn reset_action(&mut self) {
        self.action = Action::None;
    }

    /// Commit an already-validated action for this turn
    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Subtract damage from health, without any floor
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Apply this archetype's buff and return the deltas for narration
    ///
    /// Buffs stack without limit and last for the rest of the campaign. The
    /// health delta raises the maximum too, so between-encounter restoration
    /// refills to the buffed value.
    pub fn buff(&mut self) -> BuffDeltas {
        let deltas = self.archetype.buff_deltas();
        self.attack_strength += deltas.attack;
        self.defense_strength += deltas.defense;
        self.health += deltas.health;
        self.max_health += deltas.health;
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_action_parsing_is_case_insensitive() {
        assert_eq!("attack".parse::<Action>().unwrap(), Action::Attack);
        assert_eq!("DEFEND".parse::<Action>().unwrap(), Action::Defend);
        assert_eq!("  Buff ".parse::<Action>().unwrap(), Action::Buff);
    }

    #[test]
    fn test_invalid_action_does_not_parse() {
        assert!("fireball".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
        // "none" is an internal state, never valid input
        assert!("none".parse::<Action>().is_err());
    }

    #[test]
    fn test_invalid_input_leaves_action_unset() {
        let mut mage = Combatant::new("Elara", Archetype::Mage);
        if let Ok(action) = "dance".parse::<Action>() {
            mage.set_action(action);
        }
        assert_eq!(mage.action, Action::None);
    }

    #[test]
    fn test_reset_action_is_idempotent() {
        let mut goblin = Combatant::new("Snag", Archetype::Goblin);
        goblin.set_action(Action::Attack);
        goblin.reset_action();
        assert_eq!(goblin.action, Action::None);
        goblin.reset_action();
        assert_eq!(goblin.action, Action::None);
    }

    #[test]
    fn test_random_action_never_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_ne!(Action::random(&mut rng), Action::None);
        }
    }

    #[test]
    fn test_buff_stacks_additively() {
        let mut mage = Combatant::new("Elara", Archetype::Mage);
        mage.buff();
        mage.buff();
        assert_eq!(mage.attack_strength, 15 + 2 * 7);
        assert_eq!(mage.health, 40 + 2 * 7);
        assert_eq!(mage.max_health, 40 + 2 * 7);
    }

    #[test]
    fn test_restore_refills_to_buffed_maximum() {
        let mut warrior = Combatant::new("Borin", Archetype::Warrior);
        warrior.buff();
        warrior.buff();
        warrior.take_damage(30);
        warrior.restore_health();
        assert_eq!(warrior.health, 55 + 2 * 4);
        assert_eq!(warrior.health, warrior.max_health);
    }

    #[test]
    fn test_health_may_go_negative() {
        let mut goblin = Combatant::new("Snag", Archetype::Goblin);
        goblin.take_damage(9_999);
        assert!(goblin.health < 0);
        assert!(!goblin.is_alive());
    }
}
