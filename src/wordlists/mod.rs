//! Word lists and target selection
//!
//! Provides the embedded default list, file loading, and the [`WordSource`]
//! that picks a target word for each game.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::WordSource;
