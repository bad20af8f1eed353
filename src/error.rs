//! Error types raised by the game engine and its stores.

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Errors surfaced by the game engine.
///
/// Every variant except [`GameError::EmptyPool`] leaves the running session
/// intact and playable.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no candidate words available")]
    EmptyPool,

    #[error("not enough letters: {len} of {WORD_LENGTH}")]
    IncompleteGuess { len: usize },

    #[error("the game is over; start a new game to keep playing")]
    GameOver,

    #[error("no saved game to resume")]
    NoSavedGame,

    #[error("saved game is unreadable: {0}")]
    MalformedSnapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the caller can carry on with the current session
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::EmptyPool)
    }

    /// Resume failures share one meaning for the caller: nothing was restored
    #[must_use]
    pub const fn is_resume_failure(&self) -> bool {
        matches!(self, Self::NoSavedGame | Self::MalformedSnapshot(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
