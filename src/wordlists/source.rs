//! Target word selection

use super::{WORDS, loader};
use crate::core::Word;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io;
use std::path::Path;

/// Pool of candidate target words
///
/// Loaded once per process; the pool may be empty, in which case every
/// attempt to start a game fails with [`GameError::EmptyPool`].
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    pool: Vec<Word>,
}

impl WordSource {
    #[must_use]
    pub const fn new(pool: Vec<Word>) -> Self {
        Self { pool }
    }

    /// The word list bundled with the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Pick a target uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyPool`] if there are no words to choose from.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word> {
        self.pool.choose(rng).cloned().ok_or(GameError::EmptyPool)
    }
}
