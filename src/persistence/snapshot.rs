//! Saved-game snapshot format
//!
//! The snapshot is a plain JSON object:
//!
//! ```json
//! {
//!   "attempt": 1,
//!   "current_guess": "gr",
//!   "target_word": "grape",
//!   "score": 0,
//!   "board": [[{ "letter": "a", "feedback": "present" }, ...], ...]
//! }
//! ```
//!
//! Empty cells use `""` for both letter and feedback; a typed but unsubmitted
//! letter has an empty feedback.

use crate::core::{LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use crate::game::{Cell, GameSession, Row};
use serde::{Deserialize, Serialize};

/// Durable copy of every field of a [`GameSession`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    pub attempt: usize,
    pub current_guess: String,
    pub target_word: String,
    #[serde(default)]
    pub score: u32,
    pub board: Vec<Vec<CellRecord>>,
}

/// One board cell as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub feedback: String,
}

impl From<Cell> for CellRecord {
    fn from(cell: Cell) -> Self {
        Self {
            letter: cell.letter.map(String::from).unwrap_or_default(),
            feedback: cell
                .feedback
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

impl CellRecord {
    fn to_cell(&self) -> std::result::Result<Cell, String> {
        let mut chars = self.letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
            _ => return Err(format!("invalid letter {:?}", self.letter)),
        };

        let feedback = match self.feedback.as_str() {
            "" => None,
            tag => Some(
                LetterFeedback::from_tag(tag).ok_or_else(|| format!("invalid feedback {tag:?}"))?,
            ),
        };

        if letter.is_none() && feedback.is_some() {
            return Err("feedback on an empty cell".to_string());
        }

        Ok(Cell { letter, feedback })
    }
}

impl PersistedSnapshot {
    /// Copy the full state of a session
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        Self {
            attempt: session.attempt(),
            current_guess: session.current_guess().to_string(),
            target_word: session.target().text().to_string(),
            score: session.score(),
            board: session
                .board()
                .rows()
                .iter()
                .map(|row| row.iter().copied().map(CellRecord::from).collect())
                .collect(),
        }
    }

    /// Build the session this snapshot describes
    ///
    /// Either every field is applied or the snapshot is rejected as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MalformedSnapshot`] if any field is out of range
    /// or the board is inconsistent with the target word.
    pub fn restore(&self) -> Result<GameSession> {
        self.try_restore().map_err(GameError::MalformedSnapshot)
    }

    fn try_restore(&self) -> std::result::Result<GameSession, String> {
        let target =
            Word::new(self.target_word.as_str()).map_err(|e| format!("target word: {e}"))?;

        if self.board.len() != MAX_ATTEMPTS {
            return Err(format!(
                "board has {} rows, expected {MAX_ATTEMPTS}",
                self.board.len()
            ));
        }

        let mut rows = [[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS];
        for (i, (row, record)) in rows.iter_mut().zip(&self.board).enumerate() {
            if record.len() != WORD_LENGTH {
                return Err(format!(
                    "row {i} has {} cells, expected {WORD_LENGTH}",
                    record.len()
                ));
            }
            *row = parse_row(record).map_err(|e| format!("row {i}: {e}"))?;
        }

        GameSession::from_parts(
            target,
            rows,
            self.attempt,
            self.current_guess.to_lowercase(),
            self.score,
        )
    }

    /// # Errors
    ///
    /// Returns [`GameError::MalformedSnapshot`] if the text is not a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::MalformedSnapshot(e.to_string()))
    }

    /// # Errors
    ///
    /// Serialization of this plain struct does not fail in practice; any
    /// error is reported as [`GameError::Io`].
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Io(e.into()))
    }
}

fn parse_row(record: &[CellRecord]) -> std::result::Result<Row, String> {
    let mut row = [Cell::default(); WORD_LENGTH];
    for (cell, stored) in row.iter_mut().zip(record) {
        *cell = stored.to_cell()?;
    }
    Ok(row)
}
