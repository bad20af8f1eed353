//! Line input parsing for the text front-end
//!
//! Letters are typed as-is, commands start with `:` so they never collide
//! with five-letter words like "pause" or "score".

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Letters to type, then submit the row
    Guess(String),
    /// Submit whatever is typed (empty line)
    Submit,
    /// Erase this many letters (`-`, `--`, ...)
    Delete(usize),
    NewGame,
    Pause,
    Resume,
    Score,
    HighScore,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line of input
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Submit;
    }

    if line.chars().all(|c| c == '-') {
        return Command::Delete(line.len());
    }

    if let Some(name) = line.strip_prefix(':') {
        return match name.trim().to_lowercase().as_str() {
            "new" | "n" => Command::NewGame,
            "pause" | "save" | "p" => Command::Pause,
            "resume" | "load" | "r" => Command::Resume,
            "score" | "s" => Command::Score,
            "high" | "highscore" | "h" => Command::HighScore,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
    }

    if line.chars().all(|c| c.is_ascii_alphabetic()) {
        return Command::Guess(line.to_lowercase());
    }

    Command::Unknown(line.to_string())
}
