use thiserror::Error;

use crate::models::league::{MAX_TEAMS, MIN_TEAMS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeagueError {
    #[error("Invalid team count: {found} (expected {min}-{max})", min = MIN_TEAMS, max = MAX_TEAMS)]
    InvalidTeamCount { found: usize },

    #[error("Duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("Invalid roster for {team}: {reason}")]
    InvalidRoster { team: String, reason: String },

    /// No outfield player is available to be credited with a goal.
    #[error("Degenerate roster for {team}: no outfield players")]
    DegenerateRoster { team: String },

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

impl LeagueError {
    /// Precondition violations mean the league itself was built wrong; the
    /// remaining variants are rejected inputs.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, LeagueError::DegenerateRoster { .. } | LeagueError::InvalidFixture(_))
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
