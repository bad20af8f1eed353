//! Game engine
//!
//! The session state machine, its board and keyboard hints, and the [`Game`]
//! facade that ties a session to a word pool and a store.

mod board;
mod engine;
mod keyboard;
mod session;

pub use board::{Board, Cell, Row};
pub use engine::{Game, HighScoreUpdate, SubmitReport};
pub use keyboard::Keyboard;
pub use session::{
    GameSession, GameStatus, GuessResult, POINTS_PER_REMAINING_ATTEMPT, SubmitOutcome,
    score_for_win,
};
