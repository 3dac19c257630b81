//! Console battle narration

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::combat::{Combatant, TurnEvent};
use crate::ui::sink::BattleSink;

/// Clear the terminal and park the cursor top-left
///
/// Failures are ignored; a cluttered screen is not worth an error path.
pub fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Renders battle narration with `println!`
pub struct ConsoleSink;

impl ConsoleSink {
    fn status_line(combatant: &Combatant) {
        println!(
            "{}, the {} | HP {}/{} | ATK {} | DEF {}",
            combatant.name,
            combatant.archetype,
            combatant.health.max(0),
            combatant.max_health,
            combatant.attack_strength,
            combatant.defense_strength
        );
    }
}

impl BattleSink for ConsoleSink {
    fn level_start(&mut self, level: u32, _player: &Combatant, enemy: &Combatant) {
        clear_screen();
        println!("\nLevel {}", level);
        println!("You are fighting {}, the {}\n", enemy.name, enemy.archetype);
    }

    fn battle_status(&mut self, player: &Combatant, enemy: &Combatant) {
        Self::status_line(player);
        Self::status_line(enemy);
    }

    fn action_declared(&mut self, enemy: &Combatant) {
        println!("{} chose to {}", enemy.name, enemy.action);
    }

    fn turn_event(&mut self, actor: &Combatant, opponent: &Combatant, event: &TurnEvent) {
        match *event {
            TurnEvent::Hit { damage } => {
                println!("{} hits {} for {} damage!", actor.name, opponent.name, damage);
            }
            TurnEvent::Blocked { counter } => {
                println!(
                    "{} blocks the attack and counters {} for {} damage!",
                    opponent.name, actor.name, counter
                );
            }
            TurnEvent::Critical { damage } => {
                println!(
                    "{} catches {} off guard - a critical hit for {} damage!",
                    actor.name, opponent.name, damage
                );
            }
            TurnEvent::Guarded => {
                println!("{} braces behind their guard.", actor.name);
            }
            TurnEvent::Buffed(deltas) => {
                let mut gains = Vec::new();
                if deltas.attack > 0 {
                    gains.push(format!("Attack increased to {}", actor.attack_strength));
                }
                if deltas.defense > 0 {
                    gains.push(format!("Defense increased to {}", actor.defense_strength));
                }
                if deltas.health > 0 {
                    gains.push(format!("Health increased to {}", actor.health));
                }
                println!(
                    "{} {}! {}",
                    actor.name,
                    actor.archetype.buff_flavor(),
                    gains.join(", ")
                );
            }
            TurnEvent::Idle => {}
        }
    }

    fn turn_end(&mut self) {
        println!("--------------------------------");
    }

    fn level_cleared(&mut self, enemy: &Combatant) {
        println!("{}, the {} has been defeated!", enemy.name, enemy.archetype);
    }

    fn defeat(&mut self, _player: &Combatant, enemy: &Combatant, _level: u32) {
        println!(
            "You have been defeated by {}, the {}! Better luck next time!",
            enemy.name, enemy.archetype
        );
    }

    fn victory(&mut self, _player: &Combatant) {
        println!("You have defeated all the enemies! You are the champion!");
    }
}
