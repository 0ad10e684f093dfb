//! League persistence: a self-contained JSON document per save, written
//! atomically into a save directory.

pub mod error;
pub mod format;
pub mod manager;

pub use error::SaveError;
pub use format::{from_json, to_json, LeagueDocument, MatchDocument};
pub use manager::{SaveManager, DEFAULT_SAVE_DIR};
