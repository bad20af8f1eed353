//! Command implementations

pub mod input;
pub mod play;

pub use input::{Command, parse_command};
pub use play::{Flow, handle_command, run_play};
