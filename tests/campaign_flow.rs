//! Full campaign integration tests
//!
//! Scripted providers on both sides make entire campaigns deterministic,
//! covering the victory path, the defeat path, and history persistence.

use std::fs;
use std::path::PathBuf;

use dragon_slayer::campaign::Campaign;
use dragon_slayer::combat::{Action, Archetype};
use dragon_slayer::history::{HistoryStore, JsonFileHistory, Outcome};
use dragon_slayer::providers::{ScriptedActionProvider, ScriptedActionSource};
use dragon_slayer::ui::SilentSink;

fn repeat(action: Action, count: usize) -> impl Iterator<Item = Action> {
    std::iter::repeat(action).take(count)
}

/// Mage clears the whole roster against enemies that only ever defend.
///
/// Level by level: Goblin (def 2) takes 15 - 4 = 11 per hit, three hits.
/// Orc (def 5) takes 5 per hit, eight hits. The Dragon's guard (def 8)
/// blanks a base mage, so the script buffs twice (atk 29, max health 54)
/// and lands 13 per hit, five hits, untouched throughout.
#[test]
fn test_mage_campaign_victory_against_turtling_enemies() {
    let mut campaign = Campaign::new("Elara", Archetype::Mage);

    let script: Vec<Action> = repeat(Action::Attack, 3)
        .chain(repeat(Action::Attack, 8))
        .chain(repeat(Action::Buff, 2))
        .chain(repeat(Action::Attack, 5))
        .collect();
    let mut provider = ScriptedActionProvider::new(script);
    let mut enemy_actions = ScriptedActionSource::new(repeat(Action::Defend, 40));

    let record = campaign
        .run(&mut provider, &mut enemy_actions, &mut SilentSink)
        .unwrap();

    assert_eq!(record.outcome, Outcome::Victory);
    assert_eq!(record.hero, Archetype::Mage);
    assert_eq!(record.level_reached, 3);
    assert_eq!(record.final_enemy, None);
    // Restored to 40 at level three, then two +7 health buffs
    assert_eq!(record.remaining_health, Some(54));
    assert!(campaign.victory_achieved());
}

/// Mage trades attacks with every enemy and falls to the Dragon on level
/// three: the Dragon deals 18 - 6 = 12 per turn and wins the race.
#[test]
fn test_mage_campaign_defeat_by_the_dragon() {
    let mut campaign = Campaign::new("Elara", Archetype::Mage);

    // Empty scripts: both sides fall back to Attack every turn
    let mut provider = ScriptedActionProvider::new([]);
    let mut enemy_actions = ScriptedActionSource::new([]);

    let record = campaign
        .run(&mut provider, &mut enemy_actions, &mut SilentSink)
        .unwrap();

    assert_eq!(record.outcome, Outcome::Defeat);
    assert_eq!(record.level_reached, 3);
    assert_eq!(record.final_enemy, Some(Archetype::Dragon));
    assert_eq!(record.remaining_health, None);
    assert!(!campaign.victory_achieved());
    // The killing blow left the hero below zero
    assert!(campaign.player().health <= 0);
}

/// A finished campaign's record survives a save/reload round trip.
#[test]
fn test_campaign_record_persists_through_history_file() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "dragon_slayer_campaign_flow_{}.json",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    let mut campaign = Campaign::new("Borin", Archetype::Warrior);
    let mut provider = ScriptedActionProvider::new([]);
    let mut enemy_actions = ScriptedActionSource::new([]);
    let record = campaign
        .run(&mut provider, &mut enemy_actions, &mut SilentSink)
        .unwrap();

    let mut history = JsonFileHistory::load(&path);
    history.append(record.clone());
    history.save();

    let reloaded = JsonFileHistory::load(&path);
    assert_eq!(reloaded.records(), &[record]);
    let _ = fs::remove_file(&path);
}
