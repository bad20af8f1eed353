//! Game facade for the presentation layer
//!
//! Owns the word pool, the live session, the store and the random source,
//! and keeps the cached high score in step with the store.

use super::board::Board;
use super::keyboard::Keyboard;
use super::session::{GameSession, GameStatus, GuessResult, SubmitOutcome};
use crate::core::Word;
use crate::error::Result;
use crate::persistence::GameStore;
use crate::wordlists::WordSource;
use rand::Rng;
use rand::rngs::StdRng;

/// How a submitted guess affected the high score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighScoreUpdate {
    Unchanged,
    Saved { previous: u32 },
    /// New best, kept in memory but the store refused it
    Unsaved { reason: String },
}

/// Everything the front-end needs after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub result: GuessResult,
    pub high_score: HighScoreUpdate,
}

/// A running game plus everything needed to restart or restore it
pub struct Game<S: GameStore, R: Rng = StdRng> {
    source: WordSource,
    session: GameSession,
    store: S,
    rng: R,
    high_score: u32,
    /// False while the stored high score could not be read
    high_score_loaded: bool,
}

impl<S: GameStore, R: Rng> Game<S, R> {
    /// Start the first game and read the high score
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::EmptyPool`] if `source` has no words; no
    /// session is created in that case.
    pub fn new(source: WordSource, store: S, mut rng: R) -> Result<Self> {
        let session = GameSession::start(&source, &mut rng)?;

        let (high_score, high_score_loaded) = match store.read_high_score() {
            Ok(score) => (score, true),
            Err(e) => {
                tracing::warn!("Could not read high score, will retry before overwriting: {e}");
                (0, false)
            }
        };

        tracing::info!(words = source.len(), high_score, "Game ready");

        Ok(Self {
            source,
            session,
            store,
            rng,
            high_score,
            high_score_loaded,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.session.board()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.session.status()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        self.session.keyboard()
    }

    /// The target word, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.session.revealed_target()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn add_letter(&mut self, ch: char) -> bool {
        self.session.add_letter(ch)
    }

    pub fn delete_letter(&mut self) -> bool {
        self.session.delete_letter()
    }

    /// Submit the current row, recording a new high score on a win
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_guess`]. A failed high score write is
    /// not an error here; it is reported as [`HighScoreUpdate::Unsaved`].
    pub fn submit_guess(&mut self) -> Result<SubmitReport> {
        let result = self.session.submit_guess()?;

        let high_score = match result.outcome {
            SubmitOutcome::Won { score } => self.record_high_score(score),
            SubmitOutcome::Continue { .. } | SubmitOutcome::Lost { .. } => {
                HighScoreUpdate::Unchanged
            }
        };

        Ok(SubmitReport { result, high_score })
    }

    fn record_high_score(&mut self, score: u32) -> HighScoreUpdate {
        // Never overwrite a stored value we have not seen
        if !self.high_score_loaded {
            match self.store.read_high_score() {
                Ok(stored) => {
                    self.high_score = self.high_score.max(stored);
                    self.high_score_loaded = true;
                }
                Err(e) => {
                    if score <= self.high_score {
                        return HighScoreUpdate::Unchanged;
                    }
                    tracing::warn!("Stored high score still unreadable, not saving {score}: {e}");
                    self.high_score = score;
                    return HighScoreUpdate::Unsaved {
                        reason: format!("stored high score could not be read: {e}"),
                    };
                }
            }
        }

        if score <= self.high_score {
            return HighScoreUpdate::Unchanged;
        }

        let previous = self.high_score;
        self.high_score = score;

        match self.store.write_high_score(score) {
            Ok(()) => HighScoreUpdate::Saved { previous },
            Err(e) => {
                tracing::warn!("Failed to save high score {score}: {e}");
                HighScoreUpdate::Unsaved {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Throw away the current session and start over with a new word
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::EmptyPool`] if the pool is empty.
    pub fn new_game(&mut self) -> Result<()> {
        self.session.new_game(&self.source, &mut self.rng)?;
        tracing::info!("New game started");
        Ok(())
    }

    /// Save the current session; the game stays playable either way
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::Io`] if the store cannot be written.
    pub fn pause(&mut self) -> Result<()> {
        self.store.save(&self.session.snapshot())?;
        tracing::info!(attempt = self.session.attempt(), "Game paused");
        Ok(())
    }

    /// Replace the current session with the saved one
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::NoSavedGame`] or
    /// [`crate::GameError::MalformedSnapshot`]; the current session is kept.
    pub fn resume(&mut self) -> Result<()> {
        let snapshot = self.store.load()?;
        self.session.resume_from(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::persistence::{MemoryStore, PersistedSnapshot};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    /// Holds a high score whose reads can be made to fail
    #[derive(Default)]
    struct LockedStore {
        stored: u32,
        readable: bool,
        writes: Vec<u32>,
    }

    impl GameStore for LockedStore {
        fn save(&mut self, _snapshot: &PersistedSnapshot) -> Result<()> {
            Ok(())
        }

        fn load(&self) -> Result<PersistedSnapshot> {
            Err(GameError::NoSavedGame)
        }

        fn read_high_score(&self) -> Result<u32> {
            if self.readable {
                Ok(self.stored)
            } else {
                Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked").into())
            }
        }

        fn write_high_score(&mut self, score: u32) -> Result<()> {
            self.stored = score;
            self.writes.push(score);
            Ok(())
        }
    }

    fn locked_game(stored: u32) -> Game<LockedStore> {
        let source = WordSource::new(words_from_slice(&["grape"]));
        let store = LockedStore {
            stored,
            ..LockedStore::default()
        };
        Game::new(source, store, StdRng::seed_from_u64(5)).unwrap()
    }

    fn win_on_last_attempt<S: GameStore>(game: &mut Game<S>) -> SubmitReport {
        for _ in 0..5 {
            for ch in "smile".chars() {
                game.add_letter(ch);
            }
            game.submit_guess().unwrap();
        }
        for ch in "grape".chars() {
            game.add_letter(ch);
        }
        game.submit_guess().unwrap()
    }

    fn game_with(store: MemoryStore) -> Game<MemoryStore> {
        let source = WordSource::new(words_from_slice(&["grape"]));
        Game::new(source, store, StdRng::seed_from_u64(5)).unwrap()
    }

    fn enter(game: &mut Game<MemoryStore>, word: &str) -> SubmitReport {
        for ch in word.chars() {
            game.add_letter(ch);
        }
        game.submit_guess().unwrap()
    }

    #[test]
    fn empty_pool_prevents_start() {
        let result = Game::new(
            WordSource::default(),
            MemoryStore::new(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(GameError::EmptyPool)));
    }

    #[test]
    fn reads_high_score_at_start() {
        let game = game_with(MemoryStore::with_high_score(30));
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn better_win_saves_high_score() {
        let mut game = game_with(MemoryStore::with_high_score(30));
        let report = enter(&mut game, "grape");

        assert_eq!(report.high_score, HighScoreUpdate::Saved { previous: 30 });
        assert_eq!(game.high_score(), 60);
        assert_eq!(game.store().read_high_score().unwrap(), 60);
    }

    #[test]
    fn equal_win_keeps_high_score() {
        let mut game = game_with(MemoryStore::with_high_score(50));
        enter(&mut game, "brick");
        let report = enter(&mut game, "grape");

        assert_eq!(game.score(), 50);
        assert_eq!(report.high_score, HighScoreUpdate::Unchanged);
        assert_eq!(game.store().read_high_score().unwrap(), 50);
    }

    #[test]
    fn unreadable_high_score_is_never_overwritten() {
        let mut game = locked_game(60);
        assert_eq!(game.high_score(), 0);

        let report = win_on_last_attempt(&mut game);

        assert_eq!(report.result.outcome, SubmitOutcome::Won { score: 10 });
        assert!(matches!(report.high_score, HighScoreUpdate::Unsaved { .. }));
        assert!(game.store().writes.is_empty());
        assert_eq!(game.store().stored, 60);
    }

    #[test]
    fn high_score_is_reread_before_overwriting() {
        let mut game = locked_game(60);
        game.store.readable = true;

        let report = win_on_last_attempt(&mut game);

        assert_eq!(report.high_score, HighScoreUpdate::Unchanged);
        assert_eq!(game.high_score(), 60);
        assert!(game.store().writes.is_empty());
    }

    #[test]
    fn loss_keeps_high_score() {
        let mut game = game_with(MemoryStore::new());
        for _ in 0..6 {
            let report = enter(&mut game, "smile");
            assert_eq!(report.high_score, HighScoreUpdate::Unchanged);
        }
        assert_eq!(game.session().status(), GameStatus::Lost);
        assert_eq!(game.high_score(), 0);
    }

    #[test]
    fn pause_and_resume_restore_session() {
        let mut game = game_with(MemoryStore::new());
        enter(&mut game, "apple");
        game.add_letter('g');
        game.pause().unwrap();
        let paused = game.session().clone();

        game.new_game().unwrap();
        assert_ne!(game.session(), &paused);

        game.resume().unwrap();
        assert_eq!(game.session(), &paused);
    }

    #[test]
    fn resume_without_save_keeps_session() {
        let mut game = game_with(MemoryStore::new());
        game.add_letter('g');
        let before = game.session().clone();

        assert!(matches!(game.resume(), Err(GameError::NoSavedGame)));
        assert_eq!(game.session(), &before);
    }

    #[test]
    fn resume_of_corrupt_save_keeps_session() {
        let mut store = MemoryStore::new();
        let mut snapshot = PersistedSnapshot::capture(&GameSession::new(
            Word::new("grape").unwrap(),
        ));
        snapshot.attempt = 9;
        store.put_raw_snapshot(snapshot.to_json().unwrap());

        let mut game = game_with(store);
        game.add_letter('x');
        let before = game.session().clone();

        let err = game.resume().unwrap_err();
        assert!(err.is_resume_failure());
        assert_eq!(game.session(), &before);
    }
}
