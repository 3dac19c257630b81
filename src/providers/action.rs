//! Player action providers

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::combat::{Action, Combatant};
use crate::core::error::Result;

/// Supplies the player's validated action each turn
///
/// Implementations own input validation: `next_action` only ever returns one
/// of attack/defend/buff, and the core never re-requests on its own.
pub trait ActionProvider {
    /// Called when a new encounter begins, before any turn
    fn encounter_started(&mut self) {}

    /// Choose the player's action for this turn
    ///
    /// The enemy has already declared its action (visible on
    /// `enemy.action`); enemies telegraph before the player commits.
    fn next_action(&mut self, player: &Combatant, enemy: &Combatant) -> Result<Action>;

    /// Block until the player acknowledges a cleared level
    fn wait_for_continue(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Interactive provider reading from stdin
///
/// Re-prompts on invalid input; the rejected text never reaches a combatant.
pub struct ConsoleActionProvider;

impl ActionProvider for ConsoleActionProvider {
    fn next_action(&mut self, _player: &Combatant, _enemy: &Combatant) -> Result<Action> {
        loop {
            print!("Choose your action (attack/defend/buff): ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.parse::<Action>() {
                Ok(action) => return Ok(action),
                Err(err) => {
                    tracing::debug!("rejected player input: {}", err);
                    println!("Invalid action. Please enter attack, defend, or buff.");
                }
            }
        }
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        println!("\nPress Enter to continue...");
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(())
    }
}

/// Deterministic provider fed a fixed action sequence
///
/// Falls back to `Attack` once the script runs out, so scripted battles
/// always terminate.
pub struct ScriptedActionProvider {
    script: VecDeque<Action>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { script: actions.into_iter().collect() }
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn next_action(&mut self, _player: &Combatant, _enemy: &Combatant) -> Result<Action> {
        Ok(self.script.pop_front().unwrap_or(Action::Attack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Archetype;

    #[test]
    fn test_scripted_provider_replays_then_attacks() {
        let player = Combatant::new("A", Archetype::Mage);
        let enemy = Combatant::new("B", Archetype::Goblin);
        let mut provider = ScriptedActionProvider::new([Action::Buff, Action::Defend]);

        assert_eq!(provider.next_action(&player, &enemy).unwrap(), Action::Buff);
        assert_eq!(provider.next_action(&player, &enemy).unwrap(), Action::Defend);
        assert_eq!(provider.next_action(&player, &enemy).unwrap(), Action::Attack);
    }
}
