//! Menu text: help, character roster, and history rendering
//!
//! Pure string builders so the menu stays printable and testable.

use std::fmt::Write;

use crate::combat::{Archetype, BuffDeltas, ENEMY_ROSTER, HERO_ROSTER};
use crate::history::{HistoryRecord, Outcome};

pub const HOW_TO_PLAY: &str = "\
How to Play:
You are on a quest to slay the dragon, but a few enemies stand in your way.
Choose between Mage, Warrior, or Archer to start your journey.
Each hero has unique attack, defense, and buff (power up) abilities.

Attack: Deals damage to the enemy.
Defend: Reduces damage taken from the enemy.
Buff: Power up your attack, defense, or health.

Attacking damage is calculated as follows:
- If the opponent is defending, the damage dealt is the attacker's attack
  strength minus double the defender's defense strength. If all damage is
  blocked, the defender counterattacks for half of their attack strength.
- If the opponent is attacking, the damage dealt is the attacker's attack
  strength minus the defender's defense strength.
- If the opponent is buffing, the damage dealt is the attacker's attack
  strength multiplied by 2. They take a critical hit!

Tips:
- Enemies are strong, but they pick their actions at random and announce
  them before you choose. Pick your response wisely!
- Buffing powers you up, but you are at your most vulnerable while you buff.
- Buffs carry over between battles. Health is restored between battles.";

fn buff_summary(deltas: BuffDeltas) -> String {
    let mut parts = Vec::new();
    if deltas.attack > 0 {
        parts.push(format!("+{} Attack", deltas.attack));
    }
    if deltas.defense > 0 {
        parts.push(format!("+{} Defense", deltas.defense));
    }
    if deltas.health > 0 {
        parts.push(format!("+{} Health", deltas.health));
    }
    parts.join(", ")
}

fn describe(archetype: Archetype) -> String {
    let stats = archetype.base_stats();
    format!(
        "{}\n- Attack: {} | Defense: {} | Health: {}\n- Buff: \"{}\"\n",
        archetype,
        stats.attack,
        stats.defense,
        stats.max_health,
        buff_summary(archetype.buff_deltas())
    )
}

/// The stats screen: every hero and enemy with stats and buff
pub fn character_stats() -> String {
    let mut out = String::from("Hero Stats:\n");
    for hero in HERO_ROSTER {
        out.push_str(&describe(hero));
    }
    out.push_str("\nEnemy Stats:\n");
    for enemy in ENEMY_ROSTER {
        out.push_str(&describe(enemy));
    }
    out
}

/// One line per finished campaign, oldest first
pub fn render_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No games have been played yet.".to_string();
    }

    let mut out = String::from("Game History:");
    for record in records {
        match record.outcome {
            Outcome::Victory => {
                let health = record.remaining_health.unwrap_or(0);
                write!(
                    out,
                    "\n- {}, the {} slayed the dragon with {} health remaining.",
                    record.player_name, record.hero, health
                )
                .ok();
            }
            Outcome::Defeat => {
                let enemy = record
                    .final_enemy
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "an unknown foe".to_string());
                write!(
                    out,
                    "\n- {}, the {} was defeated by the {} on level {}.",
                    record.player_name, record.hero, enemy, record.level_reached
                )
                .ok();
            }
        }
    }
    out
}
