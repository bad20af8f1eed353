//! Wordle Game
//!
//! A Wordle-style word guessing game engine: guess evaluation with correct
//! duplicate-letter handling, a six-attempt state machine with scoring, and
//! pause/resume persistence with a durable high score.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::game::{Game, GameStatus};
//! use wordle_game::persistence::MemoryStore;
//! use wordle_game::wordlists::{WordSource, loader::words_from_slice};
//!
//! let source = WordSource::new(words_from_slice(&["grape"]));
//! let mut game = Game::new(source, MemoryStore::new(), StdRng::seed_from_u64(1)).unwrap();
//!
//! for ch in "grape".chars() {
//!     game.add_letter(ch);
//! }
//! game.submit_guess().unwrap();
//!
//! assert_eq!(game.session().status(), GameStatus::Won);
//! assert_eq!(game.score(), 60);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game engine
pub mod game;

// Saved games and high scores
pub mod persistence;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{GameError, Result};
