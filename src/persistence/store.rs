//! Durable storage for the saved game and the high score

use super::PersistedSnapshot;
use crate::error::{GameError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Saved game file name inside the data directory
pub const SAVE_FILE: &str = "saved_game.json";

/// High score file name inside the data directory
pub const HIGH_SCORE_FILE: &str = "high_score.txt";

/// Storage backend for pause/resume and the high score
///
/// There is exactly one snapshot slot; saving replaces whatever was there.
pub trait GameStore {
    /// Write the snapshot, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the write fails.
    fn save(&mut self, snapshot: &PersistedSnapshot) -> Result<()>;

    /// Read the stored snapshot
    ///
    /// # Errors
    ///
    /// - [`GameError::NoSavedGame`] if nothing was saved
    /// - [`GameError::MalformedSnapshot`] if the stored data cannot be parsed
    fn load(&self) -> Result<PersistedSnapshot>;

    /// Stored high score, 0 if none was recorded
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the storage exists but cannot be read.
    fn read_high_score(&self) -> Result<u32>;

    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the write fails.
    fn write_high_score(&mut self, score: u32) -> Result<()>;
}

/// Files in a single data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn save_path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }

    #[must_use]
    pub fn high_score_path(&self) -> PathBuf {
        self.dir.join(HIGH_SCORE_FILE)
    }

    /// Write to a sibling temp file, then rename over the target
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path).inspect_err(|_| {
            if let Err(e) = fs::remove_file(&tmp) {
                tracing::warn!("Failed to remove {}: {e}", tmp.display());
            }
        })
    }
}

impl GameStore for FileStore {
    fn save(&mut self, snapshot: &PersistedSnapshot) -> Result<()> {
        let path = self.save_path();
        let json = snapshot.to_json()?;
        self.write_atomic(&path, &json)?;

        tracing::debug!("Saved game to {}", path.display());
        Ok(())
    }

    fn load(&self) -> Result<PersistedSnapshot> {
        let path = self.save_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(GameError::NoSavedGame),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(GameError::MalformedSnapshot(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Loaded game from {}", path.display());
        PersistedSnapshot::from_json(&json)
    }

    fn read_high_score(&self) -> Result<u32> {
        let path = self.high_score_path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable high score in {}: {e}", path.display());
                0
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn write_high_score(&mut self, score: u32) -> Result<()> {
        let path = self.high_score_path();
        self.write_atomic(&path, &score.to_string())?;

        tracing::info!(score, "High score saved");
        Ok(())
    }
}

/// In-process store; nothing outlives the value
///
/// The snapshot is kept as JSON so it goes through the same encoding as the
/// file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
    high_score: Option<u32>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a high score
    #[must_use]
    pub const fn with_high_score(score: u32) -> Self {
        Self {
            snapshot: None,
            high_score: Some(score),
        }
    }

    /// Overwrite the stored snapshot with raw text
    pub fn put_raw_snapshot(&mut self, json: impl Into<String>) {
        self.snapshot = Some(json.into());
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, snapshot: &PersistedSnapshot) -> Result<()> {
        self.snapshot = Some(snapshot.to_json()?);
        Ok(())
    }

    fn load(&self) -> Result<PersistedSnapshot> {
        let json = self.snapshot.as_deref().ok_or(GameError::NoSavedGame)?;
        PersistedSnapshot::from_json(json)
    }

    fn read_high_score(&self) -> Result<u32> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn write_high_score(&mut self, score: u32) -> Result<()> {
        self.high_score = Some(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;
    use tempfile::TempDir;

    fn snapshot(typed: &str) -> PersistedSnapshot {
        let mut session = GameSession::new(Word::new("grape").unwrap());
        for ch in typed.chars() {
            session.add_letter(ch);
        }
        PersistedSnapshot::capture(&session)
    }

    #[test]
    fn load_without_save_is_no_saved_game() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(matches!(store.load(), Err(GameError::NoSavedGame)));
    }

    #[test]
    fn save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested"));

        store.save(&snapshot("gr")).unwrap();
        assert_eq!(store.load().unwrap(), snapshot("gr"));
        assert!(!temp_dir.path().join("nested/saved_game.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_previous_slot() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.save(&snapshot("a")).unwrap();
        store.save(&snapshot("abc")).unwrap();

        assert_eq!(store.load().unwrap().current_guess, "abc");
    }

    #[test]
    fn corrupt_save_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        fs::write(store.save_path(), "{\"attempt\": ").unwrap();

        assert!(matches!(store.load(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn non_utf8_save_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        fs::write(store.save_path(), [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(store.load(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn high_score_defaults_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.read_high_score().unwrap(), 0);
    }

    #[test]
    fn high_score_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.write_high_score(40).unwrap();
        assert_eq!(store.read_high_score().unwrap(), 40);
        assert_eq!(fs::read_to_string(store.high_score_path()).unwrap(), "40");

        // A second process sees the same value
        assert_eq!(FileStore::new(temp_dir.path()).read_high_score().unwrap(), 40);
    }

    #[test]
    fn unreadable_high_score_reads_as_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        fs::write(store.high_score_path(), "lots").unwrap();

        assert_eq!(store.read_high_score().unwrap(), 0);
    }

    #[test]
    fn save_into_unwritable_location_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        // The data directory path runs through a regular file
        let mut store = FileStore::new(blocker.join("data"));
        assert!(matches!(store.save(&snapshot("")), Err(GameError::Io(_))));
        assert!(matches!(store.write_high_score(10), Err(GameError::Io(_))));
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        // A non-empty directory where the save file should go
        fs::create_dir(store.save_path()).unwrap();
        fs::write(store.save_path().join("keep"), "").unwrap();

        assert!(matches!(store.save(&snapshot("gr")), Err(GameError::Io(_))));
        assert!(!temp_dir.path().join("saved_game.json.tmp").exists());
        assert!(store.save_path().join("keep").exists());
    }

    #[test]
    fn memory_store_behaves_like_file_store() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.load(), Err(GameError::NoSavedGame)));
        assert_eq!(store.read_high_score().unwrap(), 0);

        store.save(&snapshot("gra")).unwrap();
        assert_eq!(store.load().unwrap(), snapshot("gra"));

        store.put_raw_snapshot("[]");
        assert!(matches!(store.load(), Err(GameError::MalformedSnapshot(_))));

        store.write_high_score(30).unwrap();
        assert_eq!(store.read_high_score().unwrap(), 30);
    }
}
