//! Game session state machine
//!
//! One session is one hidden word and up to six guesses at it.
//!
//! ```text
//! InProgress ──win──▶ Won
//!     │
//!     └──6th miss──▶ Lost
//! ```
//!
//! Terminal states are left only by replacing the session (new game or resume).

use super::board::{Board, Cell, Row};
use super::keyboard::Keyboard;
use crate::core::{Evaluation, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use crate::persistence::PersistedSnapshot;
use crate::wordlists::WordSource;
use rand::Rng;

/// Points awarded per attempt left unused at the moment of the win
pub const POINTS_PER_REMAINING_ATTEMPT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a submitted guess did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Wrong guess, attempts remain
    Continue { attempts_left: usize },
    Won { score: u32 },
    /// Out of attempts; the hidden word is revealed
    Lost { target: Word },
}

/// A finalized row and its consequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub evaluation: Evaluation,
    pub outcome: SubmitOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: Word,
    board: Board,
    attempt: usize,
    guess: String,
    score: u32,
    status: GameStatus,
    keyboard: Keyboard,
}

/// Score for a win on the given 0-based attempt
#[must_use]
pub const fn score_for_win(attempt: usize) -> u32 {
    (MAX_ATTEMPTS - attempt) as u32 * POINTS_PER_REMAINING_ATTEMPT
}

impl GameSession {
    /// Fresh session for a known target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            board: Board::new(),
            attempt: 0,
            guess: String::with_capacity(WORD_LENGTH),
            score: 0,
            status: GameStatus::InProgress,
            keyboard: Keyboard::new(),
        }
    }

    /// Fresh session with a target drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyPool`] if the source has no words.
    pub fn start<R: Rng + ?Sized>(source: &WordSource, rng: &mut R) -> Result<Self> {
        source.pick_target(rng).map(Self::new)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 0-based index of the row being typed
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The hidden word, only once the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    pub(crate) const fn target(&self) -> &Word {
        &self.target
    }

    /// Type a letter into the current row
    ///
    /// Ignored when the game is over, the row is full, or `ch` is not an
    /// ASCII letter. Returns `true` if the letter was written.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.is_over() || self.guess.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }

        let ch = ch.to_ascii_lowercase();
        self.board.set_letter(self.attempt, self.guess.len(), Some(ch));
        self.guess.push(ch);
        true
    }

    /// Erase the last typed letter
    ///
    /// Returns `true` if a letter was removed.
    pub fn delete_letter(&mut self) -> bool {
        if self.is_over() || self.guess.pop().is_none() {
            return false;
        }

        self.board.set_letter(self.attempt, self.guess.len(), None);
        true
    }

    /// Submit the current row
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the session already ended
    /// - [`GameError::IncompleteGuess`] if fewer than five letters are typed
    ///
    /// Neither error changes the session.
    pub fn submit_guess(&mut self) -> Result<GuessResult> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(self.guess.as_str()).map_err(|_| GameError::IncompleteGuess {
            len: self.guess.len(),
        })?;

        let evaluation = Evaluation::evaluate(&guess, &self.target);
        self.board.finalize_row(self.attempt, &guess, &evaluation);
        self.keyboard.apply(&guess, &evaluation);
        self.guess.clear();

        let outcome = if evaluation.is_perfect() {
            self.status = GameStatus::Won;
            self.score = score_for_win(self.attempt);
            tracing::info!(attempt = self.attempt, score = self.score, "Game won");
            SubmitOutcome::Won { score: self.score }
        } else {
            self.attempt += 1;
            if self.attempt == MAX_ATTEMPTS {
                self.status = GameStatus::Lost;
                tracing::info!("Game lost");
                SubmitOutcome::Lost {
                    target: self.target.clone(),
                }
            } else {
                SubmitOutcome::Continue {
                    attempts_left: MAX_ATTEMPTS - self.attempt,
                }
            }
        };

        Ok(GuessResult {
            guess,
            evaluation,
            outcome,
        })
    }

    /// Replace this session with a fresh one
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyPool`] and leaves the session untouched if
    /// the source has no words.
    pub fn new_game<R: Rng + ?Sized>(&mut self, source: &WordSource, rng: &mut R) -> Result<()> {
        *self = Self::start(source, rng)?;
        Ok(())
    }

    /// Replace this session with the one stored in `snapshot`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MalformedSnapshot`] and leaves the session
    /// untouched if the snapshot does not describe a reachable game.
    pub fn resume_from(&mut self, snapshot: &PersistedSnapshot) -> Result<()> {
        *self = snapshot.restore()?;
        tracing::info!(attempt = self.attempt, "Game resumed");
        Ok(())
    }

    /// Durable copy of this session
    #[must_use]
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot::capture(self)
    }

    /// Rebuild a session from stored parts
    ///
    /// Status and keyboard hints are derived from the board, and every row is
    /// checked against the target, so a tampered or truncated save cannot
    /// produce a session that normal play could not reach.
    pub(crate) fn from_parts(
        target: Word,
        rows: [Row; MAX_ATTEMPTS],
        attempt: usize,
        guess: String,
        score: u32,
    ) -> std::result::Result<Self, String> {
        if attempt > MAX_ATTEMPTS {
            return Err(format!("attempt {attempt} exceeds {MAX_ATTEMPTS}"));
        }
        if guess.len() > WORD_LENGTH || !guess.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(format!("invalid guess buffer {guess:?}"));
        }

        let board = Board::from_rows(rows);
        let mut keyboard = Keyboard::new();

        for row in 0..attempt {
            let played = replay_row(&board, row, &target)?;
            if played == target {
                return Err(format!("row {row} already solves the puzzle"));
            }
            keyboard.apply(&played, &Evaluation::evaluate(&played, &target));
        }

        let status = if attempt == MAX_ATTEMPTS {
            GameStatus::Lost
        } else if board.is_row_finalized(attempt) {
            let played = replay_row(&board, attempt, &target)?;
            if played != target {
                return Err(format!("row {attempt} is submitted but the game continues"));
            }
            keyboard.apply(&played, &Evaluation::PERFECT);
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };

        if status == GameStatus::InProgress {
            let typed = &board.row(attempt)[..guess.len()];
            let rest = &board.row(attempt)[guess.len()..];
            let matches = typed
                .iter()
                .zip(guess.chars())
                .all(|(cell, ch)| cell.letter == Some(ch) && cell.feedback.is_none());
            if !matches || !rest.iter().all(Cell::is_empty) {
                return Err(format!("row {attempt} does not match guess buffer {guess:?}"));
            }
        } else if !guess.is_empty() {
            return Err("finished game has letters in the guess buffer".to_string());
        }

        let first_unused = (attempt + 1).min(MAX_ATTEMPTS);
        if let Some(row) = (first_unused..MAX_ATTEMPTS).find(|&row| !board.is_row_empty(row)) {
            return Err(format!("row {row} is past the current attempt"));
        }

        let expected_score = match status {
            GameStatus::Won => score_for_win(attempt),
            GameStatus::InProgress | GameStatus::Lost => 0,
        };
        if score != expected_score {
            return Err(format!("score {score} does not match the board"));
        }

        Ok(Self {
            target,
            board,
            attempt,
            guess,
            score,
            status,
            keyboard,
        })
    }
}

/// Read a submitted row back as a word and check its feedback
fn replay_row(board: &Board, row: usize, target: &Word) -> std::result::Result<Word, String> {
    let evaluation = board
        .row_evaluation(row)
        .ok_or_else(|| format!("row {row} is missing feedback"))?;
    let played =
        Word::new(board.row_letters(row)).map_err(|e| format!("row {row} is not a word: {e}"))?;

    if Evaluation::evaluate(&played, target) != evaluation {
        return Err(format!("row {row} feedback does not match the target"));
    }

    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap())
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    fn play(session: &mut GameSession, word: &str) -> GuessResult {
        type_word(session, word);
        session.submit_guess().unwrap()
    }

    #[test]
    fn new_session_state() {
        let session = session("grape");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt(), 0);
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.score(), 0);
        assert_eq!(session.revealed_target(), None);
    }

    #[test]
    fn add_letter_writes_pending_cell() {
        let mut session = session("grape");
        assert!(session.add_letter('A'));
        assert!(session.add_letter('p'));

        assert_eq!(session.current_guess(), "ap");
        let row = session.board().row(0);
        assert_eq!(row[0].letter, Some('a'));
        assert_eq!(row[1].letter, Some('p'));
        assert_eq!(row[1].feedback, None);
    }

    #[test]
    fn add_letter_rejects_non_letters_and_overflow() {
        let mut session = session("grape");
        assert!(!session.add_letter('1'));
        assert!(!session.add_letter(' '));
        assert!(!session.add_letter('é'));

        type_word(&mut session, "apple");
        assert!(!session.add_letter('x'));
        assert_eq!(session.current_guess(), "apple");
    }

    #[test]
    fn delete_letter_clears_cell() {
        let mut session = session("grape");
        assert!(!session.delete_letter());

        type_word(&mut session, "ap");
        assert!(session.delete_letter());
        assert_eq!(session.current_guess(), "a");
        assert!(session.board().row(0)[1].is_empty());
    }

    #[test]
    fn incomplete_guess_changes_nothing() {
        let mut session = session("grape");
        type_word(&mut session, "app");
        let before = session.clone();

        let err = session.submit_guess().unwrap_err();
        assert!(matches!(err, GameError::IncompleteGuess { len: 3 }));
        assert_eq!(session, before);
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let mut session = session("grape");
        let result = play(&mut session, "apple");

        assert_eq!(result.outcome, SubmitOutcome::Continue { attempts_left: 5 });
        assert_eq!(session.attempt(), 1);
        assert_eq!(session.current_guess(), "");
        assert!(session.board().is_row_finalized(0));
        assert_eq!(session.keyboard().get('e'), Some(LetterFeedback::Correct));
    }

    #[test]
    fn win_on_first_attempt_scores_sixty() {
        let mut session = session("grape");
        let result = play(&mut session, "grape");

        assert_eq!(result.outcome, SubmitOutcome::Won { score: 60 });
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.score(), 60);
        assert_eq!(session.attempt(), 0);
        assert_eq!(session.revealed_target().map(Word::text), Some("grape"));
    }

    #[test]
    fn win_on_last_attempt_scores_ten() {
        let mut session = session("grape");
        for _ in 0..5 {
            play(&mut session, "brick");
        }
        let result = play(&mut session, "grape");

        assert_eq!(result.outcome, SubmitOutcome::Won { score: 10 });
        assert_eq!(session.attempt(), 5);
    }

    #[test]
    fn score_formula() {
        for k in 0..MAX_ATTEMPTS {
            assert_eq!(score_for_win(k), (6 - k as u32) * 10);
        }
    }

    #[test]
    fn six_misses_lose_and_freeze_board() {
        let mut session = session("grape");
        for _ in 0..5 {
            play(&mut session, "brick");
        }
        let result = play(&mut session, "smile");

        assert_eq!(
            result.outcome,
            SubmitOutcome::Lost {
                target: Word::new("grape").unwrap()
            }
        );
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.attempt(), MAX_ATTEMPTS);

        let board = session.board().clone();
        assert!(!session.add_letter('a'));
        assert!(!session.delete_letter());
        assert!(matches!(session.submit_guess(), Err(GameError::GameOver)));
        assert_eq!(session.board(), &board);
    }

    #[test]
    fn won_game_rejects_input() {
        let mut session = session("grape");
        play(&mut session, "grape");

        assert!(!session.add_letter('a'));
        assert!(matches!(session.submit_guess(), Err(GameError::GameOver)));
        assert_eq!(session.score(), 60);
    }

    #[test]
    fn new_game_resets_everything() {
        let source = WordSource::new(words_from_slice(&["flame"]));
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session("grape");
        play(&mut session, "grape");

        session.new_game(&source, &mut rng).unwrap();

        assert_eq!(session, GameSession::new(Word::new("flame").unwrap()));
    }

    #[test]
    fn new_game_with_empty_pool_keeps_session() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session("grape");
        type_word(&mut session, "ap");
        let before = session.clone();

        let err = session.new_game(&WordSource::default(), &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EmptyPool));
        assert_eq!(session, before);
    }

    fn rebuild(session: &GameSession) -> std::result::Result<GameSession, String> {
        GameSession::from_parts(
            session.target.clone(),
            *session.board.rows(),
            session.attempt,
            session.guess.clone(),
            session.score,
        )
    }

    #[test]
    fn from_parts_rebuilds_reachable_states() {
        let mut in_progress = session("grape");
        play(&mut in_progress, "apple");
        type_word(&mut in_progress, "gr");
        assert_eq!(rebuild(&in_progress).unwrap(), in_progress);

        let mut won = session("grape");
        play(&mut won, "brick");
        play(&mut won, "grape");
        assert_eq!(rebuild(&won).unwrap(), won);

        let mut lost = session("grape");
        for _ in 0..MAX_ATTEMPTS {
            play(&mut lost, "smile");
        }
        assert_eq!(rebuild(&lost).unwrap(), lost);
    }

    #[test]
    fn from_parts_rejects_inconsistent_state() {
        let mut session = session("grape");
        play(&mut session, "apple");
        type_word(&mut session, "gr");

        let target = session.target.clone();
        let rows = *session.board.rows();

        // Attempt out of range
        assert!(GameSession::from_parts(target.clone(), rows, 7, String::new(), 0).is_err());
        // Buffer disagrees with the board
        assert!(GameSession::from_parts(target.clone(), rows, 1, "xy".into(), 0).is_err());
        // Score without a win
        assert!(GameSession::from_parts(target.clone(), rows, 1, "gr".into(), 30).is_err());
        // Feedback computed for a different target
        let other = Word::new("flame").unwrap();
        assert!(GameSession::from_parts(other, rows, 1, "gr".into(), 0).is_err());
        // Submitted row skipped over
        assert!(GameSession::from_parts(target, rows, 0, String::new(), 0).is_err());
    }
}
