//! Display functions for the game board and results

use super::formatters::{key, tile};
use crate::error::GameError;
use crate::game::{
    Board, GameSession, GameStatus, HighScoreUpdate, Keyboard, SubmitOutcome, SubmitReport,
};
use colored::Colorize;

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render the board, one line per attempt
#[must_use]
pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| tile(cell.letter, cell.feedback).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the keyboard hints in QWERTY layout
#[must_use]
pub fn render_keyboard(keyboard: &Keyboard) -> String {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| key(c, keyboard.get(c)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i * 2), keys.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the full game view
pub fn print_game(session: &GameSession) {
    println!("\n{}", render_board(session.board()));
    println!("\n{}\n", render_keyboard(session.keyboard()));

    match session.status() {
        GameStatus::InProgress => println!(
            "Attempt {} of {}",
            (session.attempt() + 1).to_string().bright_cyan(),
            crate::core::MAX_ATTEMPTS
        ),
        GameStatus::Won => println!("{}", "Solved! Type :new for another word.".green().bold()),
        GameStatus::Lost => {
            if let Some(target) = session.revealed_target() {
                println!(
                    "{} {}",
                    "Out of attempts. The word was".red().bold(),
                    target.text().to_uppercase().bright_yellow().bold()
                );
            }
        }
    }
}

/// Print what a submitted guess did
pub fn print_submit_report(report: &SubmitReport) {
    println!(
        "{} {}",
        report.result.guess.text().to_uppercase().bold(),
        report.result.evaluation.to_emoji()
    );

    match &report.result.outcome {
        SubmitOutcome::Continue { attempts_left } => {
            println!("{attempts_left} attempts left");
        }
        SubmitOutcome::Won { score } => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "  {}  {}",
                "🎉 You guessed it!".bright_green().bold(),
                format!("Score: {score}").bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        SubmitOutcome::Lost { target } => {
            println!(
                "Better luck next time! The word was {}",
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
    }

    match &report.high_score {
        HighScoreUpdate::Unchanged => {}
        HighScoreUpdate::Saved { previous } => {
            println!("{} (was {previous})", "New high score!".bright_magenta().bold());
        }
        HighScoreUpdate::Unsaved { reason } => {
            println!(
                "{} but it could not be saved: {reason}",
                "New high score!".bright_magenta().bold()
            );
        }
    }
}

/// Print a recoverable engine error
pub fn print_error(err: &GameError) {
    println!("{} {err}", "✗".red().bold());
}

pub fn print_help() {
    println!("Type letters and press Enter to submit a guess.");
    println!("  -         delete the last letter (-- for two, ...)");
    println!("  (empty)   submit what is typed so far");
    println!("  :new      start a new game");
    println!("  :pause    save the game");
    println!("  :resume   load the saved game");
    println!("  :score    show the current score");
    println!("  :high     show the high score");
    println!("  :quit     exit");
}
