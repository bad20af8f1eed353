//! Save/resume persistence and high score storage
//!
//! Features:
//! - Single-slot JSON snapshot of the whole session
//! - Atomic writes (temp file renamed over the previous save)
//! - Corrupt or inconsistent saves rejected without touching the live session

mod snapshot;
mod store;

pub use snapshot::{CellRecord, PersistedSnapshot};
pub use store::{FileStore, GameStore, HIGH_SCORE_FILE, MemoryStore, SAVE_FILE};
