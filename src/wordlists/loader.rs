//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries are trimmed and lowercased; anything that is not exactly five
//! letters is skipped, and repeated entries are kept once.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist_fives.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);

    tracing::debug!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Parse newline-separated word list text
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    collect_unique(content.lines())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_unique(slice.iter().copied())
}

fn collect_unique<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    entries
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| Word::new(entry).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
