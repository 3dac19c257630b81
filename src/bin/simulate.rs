//! Headless Campaign Simulator
//!
//! Runs heuristic-policy campaigns against the standard roster and reports
//! win rates per hero and per level, as JSON or text. Used for sanity
//! checking the stat tables without touching the interactive loop.

use clap::Parser;
use serde::Serialize;

use dragon_slayer::campaign::Campaign;
use dragon_slayer::combat::{Archetype, ENEMY_ROSTER, HERO_ROSTER};
use dragon_slayer::core::error::Result;
use dragon_slayer::history::Outcome;
use dragon_slayer::providers::{EnemyActionSource, HeuristicProvider, RandomActionSource};
use dragon_slayer::ui::SilentSink;

/// Headless campaign simulator
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Run headless hero campaigns and report win rates")]
struct Args {
    /// Campaigns per hero
    #[arg(long, default_value_t = 1000)]
    runs: u32,

    /// Only simulate this hero (mage/warrior/archer)
    #[arg(long)]
    hero: Option<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

#[derive(Serialize)]
struct LevelStats {
    enemy: String,
    attempts: u32,
    victories: u32,
}

#[derive(Serialize)]
struct HeroReport {
    hero: String,
    runs: u32,
    wins: u32,
    win_rate: f64,
    levels: Vec<LevelStats>,
}

#[derive(Serialize)]
struct SimulationReport {
    seed: u64,
    heroes: Vec<HeroReport>,
}

fn parse_hero(name: &str) -> Option<Archetype> {
    HERO_ROSTER
        .iter()
        .copied()
        .find(|hero| hero.to_string().eq_ignore_ascii_case(name))
}

fn simulate_hero(
    hero: Archetype,
    runs: u32,
    enemy_actions: &mut impl EnemyActionSource,
) -> Result<HeroReport> {
    let mut wins = 0;
    let mut levels: Vec<LevelStats> = ENEMY_ROSTER
        .iter()
        .map(|enemy| LevelStats {
            enemy: enemy.to_string(),
            attempts: 0,
            victories: 0,
        })
        .collect();

    for _ in 0..runs {
        let mut campaign = Campaign::new("Sim", hero);
        let mut provider = HeuristicProvider::new();
        let record = campaign.run(&mut provider, enemy_actions, &mut SilentSink)?;

        let reached = record.level_reached;
        for (index, stats) in levels.iter_mut().enumerate() {
            let level = index as u32 + 1;
            if level <= reached {
                stats.attempts += 1;
            }
            let cleared = match record.outcome {
                Outcome::Victory => level <= reached,
                Outcome::Defeat => level < reached,
            };
            if cleared {
                stats.victories += 1;
            }
        }
        if record.outcome == Outcome::Victory {
            wins += 1;
        }
    }

    Ok(HeroReport {
        hero: hero.to_string(),
        runs,
        wins,
        win_rate: f64::from(wins) / f64::from(runs.max(1)),
        levels,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dragon_slayer=warn")
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut enemy_actions = RandomActionSource::seeded(seed);

    let heroes: Vec<Archetype> = match &args.hero {
        Some(name) => match parse_hero(name) {
            Some(hero) => vec![hero],
            None => {
                eprintln!("Unknown hero: {} (expected mage, warrior, or archer)", name);
                std::process::exit(2);
            }
        },
        None => HERO_ROSTER.to_vec(),
    };

    let mut report = SimulationReport { seed, heroes: Vec::new() };
    for hero in heroes {
        report.heroes.push(simulate_hero(hero, args.runs, &mut enemy_actions)?);
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("seed: {}", report.seed);
        for hero in &report.heroes {
            println!(
                "{}: {}/{} wins ({:.1}%)",
                hero.hero,
                hero.wins,
                hero.runs,
                hero.win_rate * 100.0
            );
            for level in &hero.levels {
                println!(
                    "  {}: {}/{} cleared",
                    level.enemy, level.victories, level.attempts
                );
            }
        }
    }
    Ok(())
}
