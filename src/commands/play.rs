//! Interactive play mode
//!
//! Text-based front-end: reads one line at a time and forwards it to the
//! game engine.

use super::input::{Command, parse_command};
use crate::core::WORD_LENGTH;
use crate::error::GameError;
use crate::game::Game;
use crate::output::{print_error, print_game, print_help, print_submit_report};
use crate::persistence::GameStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive loop until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails. Game
/// errors are printed and play continues.
pub fn run_play<S: GameStore, R: Rng>(
    game: &mut Game<S, R>,
    mut input: impl BufRead,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║              W O R D L E                 ║");
    println!("╚══════════════════════════════════════════╝");
    println!("Guess the hidden five-letter word in six tries. Type :help for commands.");
    println!("High score: {}", game.high_score().to_string().bright_yellow());

    print_game(game.session());

    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        if handle_command(game, parse_command(&line)) == Flow::Quit {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply one command to the game and print the result
pub fn handle_command<S: GameStore, R: Rng>(game: &mut Game<S, R>, command: Command) -> Flow {
    match command {
        Command::Guess(letters) => {
            let typed = game.session().current_guess().len();
            if typed + letters.len() > WORD_LENGTH {
                println!(
                    "{} Guesses are {WORD_LENGTH} letters; {letters:?} does not fit after {typed} typed.",
                    "✗".red().bold()
                );
                return Flow::Continue;
            }

            for ch in letters.chars() {
                game.add_letter(ch);
            }
            return submit(game);
        }
        Command::Submit => return submit(game),
        Command::Delete(count) => {
            for _ in 0..count {
                if !game.delete_letter() {
                    break;
                }
            }
            print_game(game.session());
        }
        Command::NewGame => match game.new_game() {
            Ok(()) => {
                println!("New game started.");
                print_game(game.session());
            }
            Err(e) => return report(&e),
        },
        Command::Pause => match game.pause() {
            Ok(()) => println!("Game state has been saved."),
            Err(e) => return report(&e),
        },
        Command::Resume => match game.resume() {
            Ok(()) => {
                println!("Saved game restored.");
                print_game(game.session());
            }
            Err(e) if e.is_resume_failure() => {
                print_error(&e);
                println!("Nothing was restored; the current game continues.");
            }
            Err(e) => return report(&e),
        },
        Command::Score => println!("Score: {}", game.score()),
        Command::HighScore => println!("High score: {}", game.high_score()),
        Command::Help => print_help(),
        Command::Quit => return Flow::Quit,
        Command::Unknown(text) => {
            println!("Unrecognised input {text:?}; type :help for commands.");
        }
    }

    Flow::Continue
}

fn submit<S: GameStore, R: Rng>(game: &mut Game<S, R>) -> Flow {
    match game.submit_guess() {
        Ok(result) => {
            print_game(game.session());
            print_submit_report(&result);
            Flow::Continue
        }
        Err(e) => {
            let flow = report(&e);
            print_game(game.session());
            flow
        }
    }
}

/// Print an engine error; stop the loop if no game can continue
fn report(err: &GameError) -> Flow {
    print_error(err);
    if err.is_recoverable() {
        Flow::Continue
    } else {
        Flow::Quit
    }
}
