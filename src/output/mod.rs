//! Terminal output formatting
//!
//! Maps engine state to colored terminal text. Feedback tags become colors
//! here and nowhere else.

pub mod display;
pub mod formatters;

pub use display::{print_error, print_game, print_help, print_submit_report};
