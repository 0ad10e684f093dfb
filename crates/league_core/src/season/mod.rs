//! Season flow over a [`League`](crate::models::League): advancing matchdays
//! and the read-only standings and leaderboards built from team and player
//! tallies.

pub mod leaderboard;
mod matchday;
mod table;

pub use leaderboard::{Leaderboard, DEFAULT_LEADERBOARD_LIMIT, PASS_MASTER_MIN_PASSES};
