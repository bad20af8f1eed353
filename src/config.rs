//! Runtime configuration
//!
//! Collects the word list choice, the data directory and the RNG seed the
//! CLI was started with.

use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

/// Where target words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistChoice {
    /// List compiled into the binary
    Embedded,
    /// Plain-text file, one word per line
    File(PathBuf),
}

impl WordlistChoice {
    /// Interpret the `--wordlist` argument
    ///
    /// `default` (or `embedded`) selects the bundled list; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "default" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// # Errors
    ///
    /// Returns an I/O error if a word list file cannot be read.
    pub fn load(&self) -> io::Result<WordSource> {
        match self {
            Self::Embedded => Ok(WordSource::embedded()),
            Self::File(path) => WordSource::from_file(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: WordlistChoice,
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Config with the embedded list and the platform data directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            wordlist: WordlistChoice::Embedded,
            data_dir: default_data_dir(),
            seed: None,
        }
    }

    /// Random source for target selection, reproducible when seeded
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform-specific data directory for saves and the high score
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/wordle_game`
/// - Linux: `~/.local/share/wordle_game` (or `$XDG_DATA_HOME/wordle_game`)
/// - Windows: `%APPDATA%\wordle_game`
/// - Fallback: `./save_data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wordle_game")
        .map_or_else(|| PathBuf::from("./save_data"), |dirs| dirs.data_dir().to_path_buf())
}
