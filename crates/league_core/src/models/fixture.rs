use super::match_statistics::MatchStats;
use super::player::Player;
use super::team::Team;
use std::fmt;

/// Points at a player through the league's team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerRef {
    pub team: usize,
    pub player: usize,
}

impl PlayerRef {
    pub fn new(team: usize, player: usize) -> Self {
        Self { team, player }
    }

    /// `None` when the reference does not point into `teams`.
    pub fn resolve<'a>(&self, teams: &'a [Team]) -> Option<&'a Player> {
        teams.get(self.team)?.players.get(self.player)
    }
}

/// A fixture between two teams of the league, identified by their index in
/// `League::teams`.
///
/// The match never owns team state. Scorers and assisters are recorded as
/// [`PlayerRef`]s in goal order; a player who scores twice appears twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub home: usize,
    pub away: usize,
    pub home_goals: u32,
    pub away_goals: u32,
    pub scorers: Vec<PlayerRef>,
    pub assisters: Vec<PlayerRef>,
    pub home_stats: MatchStats,
    pub away_stats: MatchStats,
    pub completed: bool,
}

/// Outcome of a completed match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Match {
    /// Unplayed fixture.
    pub fn new(home: usize, away: usize) -> Self {
        Self {
            home,
            away,
            home_goals: 0,
            away_goals: 0,
            scorers: Vec::new(),
            assisters: Vec::new(),
            home_stats: MatchStats::default(),
            away_stats: MatchStats::default(),
            completed: false,
        }
    }

    pub fn involves(&self, team: usize) -> bool {
        self.home == team || self.away == team
    }

    /// `None` until the match has been simulated.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.completed {
            return None;
        }
        Some(match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        })
    }

    /// League points handed out by this match: 3 for a decisive result, 2 for
    /// a draw, 0 while unplayed.
    pub fn points_awarded(&self) -> u32 {
        match self.outcome() {
            Some(MatchOutcome::Draw) => 2,
            Some(_) => 3,
            None => 0,
        }
    }

    /// Human readable line such as `✓ Lions 2 - 1 Tigers`.
    pub fn describe(&self, teams: &[Team]) -> String {
        MatchLine { fixture: self, teams }.to_string()
    }
}

struct MatchLine<'a> {
    fixture: &'a Match,
    teams: &'a [Team],
}

impl fmt::Display for MatchLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = |idx: usize| self.teams.get(idx).map(|t| t.name.as_str()).unwrap_or("?");
        let status = if self.fixture.completed { "✓" } else { "⏳" };
        write!(
            f,
            "{} {} {} - {} {}",
            status,
            name(self.fixture.home),
            self.fixture.home_goals,
            self.fixture.away_goals,
            name(self.fixture.away)
        )
    }
}
