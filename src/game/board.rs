//! Board of guesses
//!
//! Six rows of five cells. A row is finalized once its feedback is written;
//! after that only a new game or a resume replaces it.

use crate::core::{Evaluation, LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH, Word};

/// A single letter slot on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub feedback: Option<LetterFeedback>,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none() && self.feedback.is_none()
    }
}

pub type Row = [Cell; WORD_LENGTH];

/// Grid of `MAX_ATTEMPTS` rows by `WORD_LENGTH` cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_ATTEMPTS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn from_rows(rows: [Row; MAX_ATTEMPTS]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// # Panics
    /// Panics if `row >= MAX_ATTEMPTS`
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// Whether every cell of the row carries feedback
    #[must_use]
    pub fn is_row_finalized(&self, row: usize) -> bool {
        self.rows[row].iter().all(|cell| cell.feedback.is_some())
    }

    #[must_use]
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.rows[row].iter().all(Cell::is_empty)
    }

    /// Letters of a row as a string, stopping at the first empty cell
    #[must_use]
    pub fn row_letters(&self, row: usize) -> String {
        self.rows[row].iter().map_while(|cell| cell.letter).collect()
    }

    /// Evaluation of a finalized row
    #[must_use]
    pub fn row_evaluation(&self, row: usize) -> Option<Evaluation> {
        let mut feedback = [LetterFeedback::Absent; WORD_LENGTH];
        for (slot, cell) in feedback.iter_mut().zip(&self.rows[row]) {
            *slot = cell.feedback?;
        }
        Some(Evaluation::new(feedback))
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.rows[row][col] = Cell {
            letter,
            feedback: None,
        };
    }

    pub(crate) fn finalize_row(&mut self, row: usize, guess: &Word, evaluation: &Evaluation) {
        for (col, (cell, &feedback)) in self.rows[row]
            .iter_mut()
            .zip(evaluation.feedback())
            .enumerate()
        {
            *cell = Cell {
                letter: Some(char::from(guess.char_at(col))),
                feedback: Some(feedback),
            };
        }
    }
}
