//! Dragon Slayer - entry point
//!
//! Menu loop around the campaign core: help, new game, stats, history,
//! save-and-exit. History is loaded once at startup and written on exit.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use dragon_slayer::campaign::Campaign;
use dragon_slayer::combat::{Archetype, HERO_ROSTER};
use dragon_slayer::core::error::Result;
use dragon_slayer::history::{HistoryRecord, HistoryStore, JsonFileHistory};
use dragon_slayer::providers::{ConsoleActionProvider, RandomActionSource};
use dragon_slayer::ui::console::{clear_screen, ConsoleSink};
use dragon_slayer::ui::text;

/// Turn-based text combat: slay the dragon
#[derive(Parser, Debug)]
#[command(name = "dragon-slayer")]
#[command(about = "Turn-based text combat: slay the dragon")]
struct Args {
    /// Path of the game history JSON file
    #[arg(long, default_value = "game_history.json")]
    history: PathBuf,

    /// Fix the enemy RNG seed for reproducible battles
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dragon_slayer=info")
        .init();

    let args = Args::parse();
    clear_screen();

    let mut history = JsonFileHistory::load(&args.history);

    let player_name = prompt_line("Enter your name: ")?;
    println!(
        "Welcome to Dragon Slayer {}! Can you defeat the dragon?",
        player_name
    );

    loop {
        println!("\nWhat would you like to do?");
        println!("1. How to Play");
        println!("2. Start new game");
        println!("3. View character stats");
        println!("4. View game history");
        println!("5. Save and Exit");
        println!();

        let choice = prompt_line("Enter your choice (1-5): ")?;
        match choice.as_str() {
            "1" => {
                clear_screen();
                println!("{}", text::HOW_TO_PLAY);
            }
            "2" => {
                let record = play_campaign(&player_name, args.seed)?;
                history.append(record);
            }
            "3" => {
                clear_screen();
                println!("{}", text::character_stats());
            }
            "4" => {
                clear_screen();
                println!("{}", text::render_history(history.records()));
            }
            "5" => {
                history.save();
                println!("Game saved. Thanks for playing!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }

        prompt_line("\nPress Enter to continue...")?;
        clear_screen();
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn choose_hero() -> Result<Archetype> {
    clear_screen();
    loop {
        println!("\nGet ready to battle! Who will you choose to slay the dragon?");
        for (index, hero) in HERO_ROSTER.iter().enumerate() {
            println!("{}. {}", index + 1, hero);
        }

        let choice = prompt_line("Choose your hero (enter 1, 2, or 3): ")?;
        match choice.as_str() {
            "1" => return Ok(HERO_ROSTER[0]),
            "2" => return Ok(HERO_ROSTER[1]),
            "3" => return Ok(HERO_ROSTER[2]),
            _ => println!("Invalid hero type. Please choose again."),
        }
    }
}

fn play_campaign(player_name: &str, seed: Option<u64>) -> Result<HistoryRecord> {
    let hero = choose_hero()?;
    println!("{}, the {}, your journey begins!", player_name, hero);

    let mut campaign = Campaign::new(player_name, hero);
    let mut provider = ConsoleActionProvider;
    let mut enemy_actions = match seed {
        Some(seed) => RandomActionSource::seeded(seed),
        None => RandomActionSource::from_entropy(),
    };

    let record = campaign.run(&mut provider, &mut enemy_actions, &mut ConsoleSink)?;
    tracing::info!(
        "campaign finished: {} at level {}",
        record.outcome,
        record.level_reached
    );
    Ok(record)
}
