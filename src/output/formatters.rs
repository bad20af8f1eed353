//! Formatting utilities for terminal output

use crate::core::LetterFeedback;
use colored::{ColoredString, Colorize};

/// Tile backgrounds, as RGB
pub const COLOR_CORRECT: (u8, u8, u8) = (0x6a, 0xaa, 0x64); // Green
pub const COLOR_PRESENT: (u8, u8, u8) = (0xc9, 0xb4, 0x58); // Yellow
pub const COLOR_ABSENT: (u8, u8, u8) = (0x78, 0x7c, 0x7e); // Gray
pub const COLOR_EMPTY: (u8, u8, u8) = (0xd3, 0xd6, 0xda); // Light gray
pub const COLOR_UNUSED_KEY: (u8, u8, u8) = (0x81, 0x83, 0x84);

/// Background for a board tile
#[must_use]
pub const fn tile_color(feedback: Option<LetterFeedback>) -> (u8, u8, u8) {
    match feedback {
        Some(LetterFeedback::Correct) => COLOR_CORRECT,
        Some(LetterFeedback::Present) => COLOR_PRESENT,
        Some(LetterFeedback::Absent) => COLOR_ABSENT,
        None => COLOR_EMPTY,
    }
}

/// Background for an on-screen keyboard key
#[must_use]
pub const fn key_color(feedback: Option<LetterFeedback>) -> (u8, u8, u8) {
    match feedback {
        None => COLOR_UNUSED_KEY,
        hint => tile_color(hint),
    }
}

/// A board tile: the letter padded to three columns on its feedback color
#[must_use]
pub fn tile(letter: Option<char>, feedback: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {} ", letter.map_or(' ', |c| c.to_ascii_uppercase()));
    let (r, g, b) = tile_color(feedback);

    if feedback.is_some() {
        text.white().bold().on_truecolor(r, g, b)
    } else {
        text.black().bold().on_truecolor(r, g, b)
    }
}

/// A keyboard key
#[must_use]
pub fn key(letter: char, hint: Option<LetterFeedback>) -> ColoredString {
    let (r, g, b) = key_color(hint);
    format!(" {} ", letter.to_ascii_uppercase())
        .white()
        .bold()
        .on_truecolor(r, g, b)
}
