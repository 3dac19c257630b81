//! One hero against one enemy, turn by turn
//!
//! Each cycle: status snapshot, enemy telegraphs its action, player commits,
//! player resolves, then the enemy resolves unless the player's action
//! already dropped it. Resolution always runs to completion for both sides,
//! so an enemy that survives can still strike a hero who just fell to a
//! counter.

use crate::combat::{resolve, Combatant};
use crate::core::error::Result;
use crate::providers::{ActionProvider, EnemyActionSource};
use crate::ui::BattleSink;

/// Encounter state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    InProgress,
    PlayerDefeated,
    EnemyDefeated,
}

/// Drive the encounter until one side reaches zero health
///
/// Player death takes reporting priority: `PlayerDefeated` is returned
/// whenever the player's health is gone after a full cycle, regardless of
/// the enemy's.
pub fn run_encounter(
    player: &mut Combatant,
    enemy: &mut Combatant,
    provider: &mut impl ActionProvider,
    enemy_actions: &mut impl EnemyActionSource,
    sink: &mut impl BattleSink,
) -> Result<EncounterState> {
    provider.encounter_started();
    let mut state = EncounterState::InProgress;

    while state == EncounterState::InProgress {
        sink.battle_status(player, enemy);

        // The enemy telegraphs first; the player chooses knowing it
        enemy.reset_action();
        enemy.set_action(enemy_actions.next_action());
        sink.action_declared(enemy);

        player.reset_action();
        let action = provider.next_action(player, enemy)?;
        player.set_action(action);

        let event = resolve(player, enemy);
        sink.turn_event(player, enemy, &event);

        // The enemy only acts if the player's resolution left it standing
        if enemy.is_alive() {
            let event = resolve(enemy, player);
            sink.turn_event(enemy, player, &event);
        }
        sink.turn_end();

        if !player.is_alive() {
            state = EncounterState::PlayerDefeated;
        } else if !enemy.is_alive() {
            state = EncounterState::EnemyDefeated;
        }
    }

    Ok(state)
}
