//! Campaign state machine
//!
//! A campaign walks the enemy roster strictly in order. Health is restored
//! to the buffed maximum at the start of every level; buffs themselves are
//! never reset. Each terminal state produces exactly one history record.

use crate::campaign::encounter::{run_encounter, EncounterState};
use crate::combat::{Archetype, Combatant, ENEMY_ROSTER};
use crate::core::error::Result;
use crate::history::{HistoryRecord, Outcome};
use crate::providers::{ActionProvider, EnemyActionSource};
use crate::ui::BattleSink;

/// Where the campaign currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignState {
    /// Hero chosen but no battle started yet
    Selecting,
    /// Fighting the enemy at this 1-based level
    Battling(u32),
    /// The level's enemy just fell; awaiting the next level
    LevelCleared(u32),
    /// All enemies defeated (terminal)
    Victorious,
    /// The hero fell (terminal)
    Defeated,
}

/// One playthrough: a hero against the fixed enemy sequence
pub struct Campaign {
    player: Combatant,
    enemies: Vec<Combatant>,
    state: CampaignState,
}

impl Campaign {
    /// Standard campaign against the Goblin/Orc/Dragon roster
    pub fn new(player_name: impl Into<String>, hero: Archetype) -> Self {
        Self::with_enemies(Combatant::new(player_name, hero), roster_enemies())
    }

    /// Campaign against an arbitrary enemy sequence
    pub fn with_enemies(player: Combatant, enemies: Vec<Combatant>) -> Self {
        Self {
            player,
            enemies,
            state: CampaignState::Selecting,
        }
    }

    pub fn state(&self) -> CampaignState {
        self.state
    }

    pub fn victory_achieved(&self) -> bool {
        self.state == CampaignState::Victorious
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// Play the campaign to one of its terminal states
    ///
    /// Returns the single history record the terminal state produces.
    pub fn run(
        &mut self,
        provider: &mut impl ActionProvider,
        enemy_actions: &mut impl EnemyActionSource,
        sink: &mut impl BattleSink,
    ) -> Result<HistoryRecord> {
        let last_level = self.enemies.len() as u32;

        for index in 0..self.enemies.len() {
            let level = index as u32 + 1;
            self.state = CampaignState::Battling(level);
            self.player.restore_health();

            let enemy = &mut self.enemies[index];
            sink.level_start(level, &self.player, enemy);

            match run_encounter(&mut self.player, enemy, provider, enemy_actions, sink)? {
                EncounterState::PlayerDefeated => {
                    self.state = CampaignState::Defeated;
                    sink.defeat(&self.player, enemy, level);
                    return Ok(HistoryRecord {
                        player_name: self.player.name.clone(),
                        hero: self.player.archetype,
                        outcome: Outcome::Defeat,
                        level_reached: level,
                        final_enemy: Some(enemy.archetype),
                        remaining_health: None,
                    });
                }
                EncounterState::EnemyDefeated => {
                    self.state = CampaignState::LevelCleared(level);
                    sink.level_cleared(enemy);
                    if level < last_level {
                        provider.wait_for_continue()?;
                    }
                }
                EncounterState::InProgress => {
                    unreachable!("encounter returned while still in progress")
                }
            }
        }

        self.state = CampaignState::Victorious;
        sink.victory(&self.player);
        Ok(HistoryRecord {
            player_name: self.player.name.clone(),
            hero: self.player.archetype,
            outcome: Outcome::Victory,
            level_reached: last_level,
            final_enemy: None,
            remaining_health: Some(self.player.health),
        })
    }
}

/// The standard enemy lineup with their given names
fn roster_enemies() -> Vec<Combatant> {
    ENEMY_ROSTER
        .iter()
        .map(|&archetype| Combatant::new(enemy_name(archetype), archetype))
        .collect()
}

fn enemy_name(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Goblin => "Snag",
        Archetype::Orc => "Gorluk",
        Archetype::Dragon => "Ashfang",
        // Heroes are named by the player
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Action;
    use crate::providers::{ScriptedActionProvider, ScriptedActionSource};
    use crate::ui::SilentSink;

    fn weak_enemy(name: &str) -> Combatant {
        Combatant::with_stats(name, Archetype::Goblin, 0, 0, 1)
    }

    #[test]
    fn test_defeat_on_final_level_records_the_killer() {
        // One-shots the first two levels, then faces a wall that one-shots
        // back. Scripts are empty: both sides fall back to Attack.
        let hero = Combatant::with_stats("Hero", Archetype::Mage, 999, 0, 50);
        let enemies = vec![
            weak_enemy("Snag"),
            weak_enemy("Grub"),
            Combatant::with_stats("Ashfang", Archetype::Dragon, 999, 2000, 60),
        ];
        let mut campaign = Campaign::with_enemies(hero, enemies);
        let mut provider = ScriptedActionProvider::new([]);
        let mut enemy_actions = ScriptedActionSource::new([]);

        let record = campaign
            .run(&mut provider, &mut enemy_actions, &mut SilentSink)
            .unwrap();

        assert_eq!(record.outcome, Outcome::Defeat);
        assert_eq!(record.level_reached, 3);
        assert_eq!(record.final_enemy, Some(Archetype::Dragon));
        assert_eq!(record.remaining_health, None);
        assert_eq!(campaign.state(), CampaignState::Defeated);
        assert!(!campaign.victory_achieved());
    }

    #[test]
    fn test_victory_records_remaining_health() {
        let hero = Combatant::with_stats("Hero", Archetype::Archer, 10, 5, 48);
        let mut campaign = Campaign::with_enemies(hero, vec![weak_enemy("Snag")]);
        let mut provider = ScriptedActionProvider::new([]);
        let mut enemy_actions = ScriptedActionSource::new([]);

        let record = campaign
            .run(&mut provider, &mut enemy_actions, &mut SilentSink)
            .unwrap();

        assert_eq!(record.outcome, Outcome::Victory);
        assert_eq!(record.level_reached, 1);
        assert_eq!(record.final_enemy, None);
        assert_eq!(record.remaining_health, Some(48));
        assert_eq!(campaign.state(), CampaignState::Victorious);
        assert!(campaign.victory_achieved());
    }

    #[test]
    fn test_health_restored_between_levels_keeps_buffs() {
        // Mage buffs once on level one, then clears both levels. Health is
        // refilled to the buffed maximum at the start of level two.
        let hero = Combatant::new("Elara", Archetype::Mage);
        let enemies = vec![weak_enemy("Snag"), weak_enemy("Grub")];
        let mut campaign = Campaign::with_enemies(hero, enemies);
        let mut provider = ScriptedActionProvider::new([Action::Buff, Action::Attack]);
        // Harmless enemies: zero attack makes every action a no-op threat
        let mut enemy_actions = ScriptedActionSource::new([]);

        let record = campaign
            .run(&mut provider, &mut enemy_actions, &mut SilentSink)
            .unwrap();

        assert_eq!(record.outcome, Outcome::Victory);
        assert_eq!(record.remaining_health, Some(40 + 7));
        assert_eq!(campaign.player().attack_strength, 15 + 7);
        assert_eq!(campaign.player().max_health, 40 + 7);
    }

    #[test]
    fn test_new_campaign_starts_selecting() {
        let campaign = Campaign::new("Elara", Archetype::Mage);
        assert_eq!(campaign.state(), CampaignState::Selecting);
        assert_eq!(campaign.player().archetype, Archetype::Mage);
    }
}
