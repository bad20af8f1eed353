//! Wordle - CLI
//!
//! Play a Wordle-style word guessing game in the terminal, with pause/resume
//! and a persistent high score.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::run_play,
    config::{GameConfig, WordlistChoice, default_data_dir},
    game::Game,
    persistence::{FileStore, GameStore},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Directory for the saved game and high score (default: platform data dir)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for target word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Print the stored high score
    HighScore,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            wordlist: WordlistChoice::from_arg(&self.wordlist),
            data_dir: self.data_dir.clone().unwrap_or_else(default_data_dir),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    tracing::debug!("Data directory: {}", config.data_dir.display());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::HighScore => run_high_score_command(&config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let source = config
        .wordlist
        .load()
        .with_context(|| format!("Failed to load word list {:?}", config.wordlist))?;
    let store = FileStore::new(&config.data_dir);

    let mut game = Game::new(source, store, config.rng()).context("Cannot start a game")?;

    let stdin = std::io::stdin();
    run_play(&mut game, stdin.lock())
}

fn run_high_score_command(config: &GameConfig) -> Result<()> {
    let store = FileStore::new(&config.data_dir);
    let high_score = store
        .read_high_score()
        .with_context(|| format!("Failed to read {}", store.high_score_path().display()))?;

    println!("High score: {high_score}");
    Ok(())
}
