//! Per-letter keyboard hints
//!
//! Tracks the best feedback seen for each letter across all submitted
//! guesses. Hints only ever move up: `Absent < Present < Correct`.

use crate::core::{Evaluation, LetterFeedback, Word};

const ALPHABET: usize = 26;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    keys: [Option<LetterFeedback>; ALPHABET],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-known feedback for a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        index_of(letter).and_then(|i| self.keys[i])
    }

    /// Record feedback for a letter, keeping the stronger of old and new
    ///
    /// Returns `true` if the stored hint changed.
    pub fn record(&mut self, letter: char, feedback: LetterFeedback) -> bool {
        let Some(i) = index_of(letter) else {
            return false;
        };

        match self.keys[i] {
            Some(current) if current >= feedback => false,
            _ => {
                self.keys[i] = Some(feedback);
                true
            }
        }
    }

    /// Fold a submitted guess into the hints
    pub fn apply(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &feedback) in guess.chars().iter().zip(evaluation.feedback()) {
            self.record(char::from(letter), feedback);
        }
    }
}

fn index_of(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter as u8 - b'a'))
}
