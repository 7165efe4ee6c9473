#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for playing Color Alchemy in a terminal.

mod config;
mod display;
mod game;
mod input;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use color_alchemy_core::{CalendarDate, ChallengeSummary, LevelId, Mode, Phase, LEVEL_COUNT};
use color_alchemy_effects::{submit_feedback, Banner, Effects, Feedback, JsonLinesSink, Rating};
use color_alchemy_session::Session;
use color_alchemy_storage::{FileStore, Persistence};
use color_alchemy_system_catalog::LevelCatalog;
use tracing_subscriber::EnvFilter;

use crate::{config::Settings, game::Game};

#[derive(Debug, Parser)]
#[command(name = "color-alchemy", version)]
#[command(about = "Match target colors by mixing RGB channels")]
struct Cli {
    /// TOML settings file (defaults to .color-alchemy/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Progress file, overriding the configured store path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Play as if today were this YYYY-MM-DD date
    #[arg(long, global = true)]
    date: Option<CalendarDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play a challenge interactively
    Play {
        #[command(subcommand)]
        target: PlayTarget,
    },
    /// List every level with its lock state
    Levels,
    /// Print the share text of today's daily result
    Share,
    /// Record feedback about the game
    Feedback {
        /// Satisfaction from 0 to 5
        #[arg(long, value_parser = parse_rating)]
        rating: Rating,

        /// Mode the feedback is about: `daily` or a level number
        #[arg(long, value_parser = parse_mode, default_value = "daily")]
        mode: Mode,

        /// Free-form comment
        text: String,
    },
}

#[derive(Debug, Subcommand)]
enum PlayTarget {
    /// Today's daily challenge
    Daily,
    /// A campaign level, numbered from 1
    Level {
        /// Level number
        #[arg(value_parser = parse_level)]
        number: LevelId,
    },
}

fn parse_level(value: &str) -> Result<LevelId, String> {
    let ordinal: u32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a level number"))?;
    if ordinal == 0 || ordinal > LEVEL_COUNT {
        return Err(format!("levels are numbered 1 to {LEVEL_COUNT}"));
    }
    Ok(LevelId::new(ordinal - 1))
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    if value.trim().eq_ignore_ascii_case("daily") {
        return Ok(Mode::Daily);
    }
    parse_level(value).map(Mode::Level)
}

fn parse_rating(value: &str) -> Result<Rating, String> {
    let raw: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a rating"))?;
    Rating::new(raw).map_err(|error| error.to_string())
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the Color Alchemy command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        settings.store_path = store;
    }
    init_logging(&settings);

    let today = cli
        .date
        .unwrap_or_else(|| CalendarDate::from_naive(Local::now().date_naive()));
    tracing::debug!(%today, store = %settings.store_path.display(), "starting");

    match cli.command {
        Commands::Play { target } => {
            let mode = match target {
                PlayTarget::Daily => Mode::Daily,
                PlayTarget::Level { number } => Mode::Level(number),
            };
            play(&settings, today, mode)
        }
        Commands::Levels => list_levels(&settings, today),
        Commands::Share => share(&settings, today),
        Commands::Feedback { rating, mode, text } => {
            feedback(&settings, rating, mode, text);
            Ok(())
        }
    }
}

fn open_persistence(settings: &Settings) -> Result<Persistence<FileStore>> {
    let store = FileStore::open(&settings.store_path)
        .with_context(|| format!("failed to open progress at {}", settings.store_path.display()))?;
    Ok(Persistence::new(store))
}

fn play(settings: &Settings, today: CalendarDate, mode: Mode) -> Result<()> {
    let persistence = open_persistence(settings)?;
    let session = Session::new(today, settings.rules, persistence.load());
    let effects = Effects::new(Banner::new(io::stdout()));
    let mut game = Game::new(session, persistence, effects);

    let stdin = io::stdin();
    game.run(mode, stdin.lock(), &mut io::stdout())
}

fn list_levels(settings: &Settings, today: CalendarDate) -> Result<()> {
    let progress = open_persistence(settings)?.load();
    let catalog = LevelCatalog::standard();
    let mut out = io::stdout().lock();
    writeln!(out, "{} levels, {} unlocked ({today})", catalog.len(), progress.unlocked.len())?;
    for definition in catalog.iter() {
        writeln!(out, "{}", display::level_row(definition, &progress.unlocked))?;
    }
    Ok(())
}

fn share(settings: &Settings, today: CalendarDate) -> Result<()> {
    let progress = open_persistence(settings)?.load();
    let Some(record) = progress.daily.filter(|record| record.date == today) else {
        println!("No daily result recorded for {today}.");
        return Ok(());
    };

    let target = color_alchemy_system_generator::daily_target(today);
    let summary = ChallengeSummary {
        mode: Mode::Daily,
        phase: if record.won {
            Phase::Won
        } else {
            Phase::Exhausted
        },
        date: today,
        attempts_used: record.attempts_used,
        max_attempts: settings.rules.daily_max_attempts,
        hints_used: record.hints_used,
        accuracy: record.final_mix.accuracy(target),
    };
    if let Some(text) = color_alchemy_system_sharing::share_text(&summary) {
        println!("{text}");
    }
    Ok(())
}

fn feedback(settings: &Settings, rating: Rating, mode: Mode, text: String) {
    let entry = Feedback {
        free_text: text,
        timestamp: Utc::now(),
        mode,
        rating,
    };
    let mut sink = JsonLinesSink::new(&settings.feedback_path);
    if submit_feedback(&mut sink, &entry) {
        println!("Thanks for the feedback!");
    } else {
        eprintln!("Feedback could not be saved.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn level_numbers_are_one_based() {
        assert_eq!(parse_level("1"), Ok(LevelId::new(0)));
        assert_eq!(parse_level("50"), Ok(LevelId::new(49)));
        assert!(parse_level("0").is_err());
        assert!(parse_level("51").is_err());
    }

    #[test]
    fn play_level_parses() {
        let cli = Cli::try_parse_from([
            "color-alchemy",
            "--date",
            "2026-10-19",
            "play",
            "level",
            "3",
        ])
        .expect("valid arguments");
        assert!(matches!(
            cli.command,
            Commands::Play {
                target: PlayTarget::Level { number }
            } if number == LevelId::new(2)
        ));
        assert_eq!(cli.date, CalendarDate::from_ymd(2026, 10, 19));
    }

    #[test]
    fn feedback_rejects_ratings_above_five() {
        assert!(
            Cli::try_parse_from(["color-alchemy", "feedback", "--rating", "6", "meh"]).is_err()
        );
        let cli = Cli::try_parse_from([
            "color-alchemy",
            "feedback",
            "--rating",
            "5",
            "--mode",
            "12",
            "lovely greens",
        ])
        .expect("valid arguments");
        let Commands::Feedback { rating, mode, text } = cli.command else {
            panic!("expected feedback");
        };
        assert_eq!(rating.get(), 5);
        assert_eq!(mode, Mode::Level(LevelId::new(11)));
        assert_eq!(text, "lovely greens");
    }
}
