//! Guess evaluation and per-letter feedback
//!
//! Each letter of a guess is classified against the target word:
//! - `Absent`  (letter not in the word, or all its occurrences already used)
//! - `Present` (letter in the word, wrong position)
//! - `Correct` (letter in the correct position)
//!
//! The variant order doubles as precedence: `Absent < Present < Correct`.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Stable lowercase tag, also used in saved games
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Parse a tag produced by [`LetterFeedback::as_str`]
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "absent" => Some(Self::Absent),
            "present" => Some(Self::Present),
            "correct" => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback for a whole guess, one entry per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterFeedback; WORD_LENGTH]);

impl Evaluation {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(feedback: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Duplicate letters are never credited more often than they occur in the
    /// target: exact matches claim their letter first, then the remaining
    /// occurrences are handed out left to right.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the pool
    /// 2. Second pass: mark `Present` while the pool still holds the letter, else `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("grape").unwrap();
    ///
    /// let evaluation = Evaluation::evaluate(&guess, &target);
    /// assert_eq!(
    ///     evaluation.feedback(),
    ///     &[Present, Present, Absent, Absent, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = LetterFeedback::Correct;

                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Correct {
                continue;
            }

            let letter = guess.char_at(i);
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter feedback in guess order
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
