//! # league_core - Round-Robin Football League Simulation
//!
//! Builds a league of 2 to 20 teams, schedules a double round-robin and plays
//! it matchday by matchday with a statistical match model.
//!
//! ## Features
//! - Seeded, injectable random source (same seed = same season)
//! - Possession, shots, goals, cards and passes derived from team ratings
//! - League table and player leaderboards as pure queries
//! - Self-contained JSON save files with atomic writes
//!
//! ```rust
//! use league_core::{rng, League, MatchEngine};
//!
//! let mut rng = rng::seeded(42);
//! let mut league = League::with_default_squads("Demo", &["Lions", "Tigers"], &mut rng).unwrap();
//! league.generate_fixtures(&mut rng);
//!
//! let engine = MatchEngine::default();
//! league.simulate_season(&engine, &mut rng).unwrap();
//! assert!(league.is_season_complete());
//! assert_eq!(league.league_table().len(), 2);
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod engine;
pub mod error;
pub mod models;
pub mod rng;
pub mod save;
pub mod schedule;
pub mod season;

pub use engine::{EngineConfig, MatchEngine};
pub use error::{LeagueError, Result};
pub use models::{League, Match, MatchOutcome, MatchStats, Player, PlayerRef, Position, Team};
pub use save::{SaveError, SaveManager};
pub use season::{Leaderboard, DEFAULT_LEADERBOARD_LIMIT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
