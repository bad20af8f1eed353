//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure, deterministic and testable in isolation.

mod feedback;
mod word;

pub use feedback::{Evaluation, LetterFeedback};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;
