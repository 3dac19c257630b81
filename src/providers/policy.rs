//! Heuristic self-play policy for headless simulation

use crate::combat::{Action, Combatant};
use crate::core::error::Result;
use crate::providers::action::ActionProvider;

/// Scripted opening plus reactive play against the enemy's declared action
///
/// - buff on the first two turns of an encounter (at most twice)
/// - buff freely into a defending enemy
/// - defend when low on health and the enemy is attacking
/// - otherwise attack
///
/// "Low" means at or below 40% of the current maximum health.
pub struct HeuristicProvider {
    turn: u32,
    buffs_applied: u32,
}

impl HeuristicProvider {
    pub fn new() -> Self {
        Self { turn: 0, buffs_applied: 0 }
    }
}

impl Default for HeuristicProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionProvider for HeuristicProvider {
    fn encounter_started(&mut self) {
        self.turn = 0;
        self.buffs_applied = 0;
    }

    fn next_action(&mut self, player: &Combatant, enemy: &Combatant) -> Result<Action> {
        self.turn += 1;
        let low_health = player.health <= player.max_health * 2 / 5;

        let action = if self.turn <= 2 && self.buffs_applied < 2 {
            Action::Buff
        } else if enemy.action == Action::Defend {
            Action::Buff
        } else if enemy.action == Action::Attack && low_health {
            Action::Defend
        } else {
            Action::Attack
        };

        if action == Action::Buff {
            self.buffs_applied += 1;
        }
        Ok(action)
    }
}
