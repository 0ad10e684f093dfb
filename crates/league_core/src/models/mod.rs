pub mod fixture;
pub mod league;
pub mod match_statistics;
pub mod player;
pub mod team;

pub use fixture::{Match, MatchOutcome, PlayerRef};
pub use league::{League, MAX_TEAMS, MIN_TEAMS};
pub use match_statistics::MatchStats;
pub use player::{Player, Position};
pub use team::{Team, DEFAULT_TEAM_RATING};
