use super::fixture::{Match, PlayerRef};
use super::player::Player;
use super::team::Team;
use crate::error::{LeagueError, Result};
use crate::schedule;
use rand::Rng;
use std::ops::Range;

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 20;

/// Full league state: the teams (which own their players), the season's
/// fixture list in generation order and the number of matchdays already
/// played.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub name: String,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub current_matchday: u32,
}

impl League {
    /// League without fixtures. Fails when the team count is outside
    /// `MIN_TEAMS..=MAX_TEAMS`, a name repeats or a roster breaks the roster
    /// contract.
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Result<Self> {
        validate_teams(&teams)?;
        let league = Self { name: name.into(), teams, matches: Vec::new(), current_matchday: 0 };
        log::info!("Created league '{}' with {} teams", league.name, league.teams.len());
        Ok(league)
    }

    /// League whose teams all get the standard squad.
    pub fn with_default_squads<R, S>(name: impl Into<String>, team_names: &[S], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let teams = team_names
            .iter()
            .map(|n| Team::with_default_squad(n.as_ref(), rng))
            .collect();
        Self::new(name, teams)
    }

    /// Replace the fixture list with a freshly generated double round-robin
    /// and restart the season counter.
    pub fn generate_fixtures<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let plan = schedule::generate(self.teams.len(), rng);
        log::info!(
            "Generated {} fixtures in {} scheduling rounds",
            plan.fixture_count(),
            plan.matchdays.len()
        );
        self.matches = plan.into_matches();
        self.current_matchday = 0;
    }

    /// Fixtures simulated per matchday.
    pub fn matches_per_matchday(&self) -> usize {
        (self.teams.len() / 2).max(1)
    }

    pub fn total_matchdays(&self) -> u32 {
        (self.matches.len() / self.matches_per_matchday()) as u32
    }

    pub fn is_season_complete(&self) -> bool {
        self.current_matchday >= self.total_matchdays()
    }

    /// Slice of `matches` making up `matchday` (1-based). Empty for 0 and for
    /// matchdays past the end of the season.
    pub fn matchday_range(&self, matchday: u32) -> Range<usize> {
        if matchday == 0 || matchday > self.total_matchdays() {
            return 0..0;
        }
        let per_day = self.matches_per_matchday();
        let start = (matchday as usize - 1) * per_day;
        start..(start + per_day).min(self.matches.len())
    }

    pub fn matchday_fixtures(&self, matchday: u32) -> &[Match] {
        &self.matches[self.matchday_range(matchday)]
    }

    /// Matches already simulated, in fixture order.
    pub fn completed_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.completed)
    }

    pub fn team_index(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.name == name)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn player(&self, player_ref: PlayerRef) -> Option<&Player> {
        player_ref.resolve(&self.teams)
    }

    /// Every rostered player, team by team in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players.iter())
    }
}

pub(crate) fn validate_teams(teams: &[Team]) -> Result<()> {
    if !(MIN_TEAMS..=MAX_TEAMS).contains(&teams.len()) {
        return Err(LeagueError::InvalidTeamCount { found: teams.len() });
    }
    for (i, team) in teams.iter().enumerate() {
        if teams[..i].iter().any(|other| other.name == team.name) {
            return Err(LeagueError::DuplicateTeam(team.name.clone()));
        }
        team.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    fn league(names: &[&str], seed: u64) -> League {
        let mut rng = rng::seeded(seed);
        let mut league = League::with_default_squads("Test League", names, &mut rng).unwrap();
        league.generate_fixtures(&mut rng);
        league
    }

    #[test]
    fn test_team_count_bounds() {
        let mut rng = rng::seeded(1);
        assert!(matches!(
            League::with_default_squads("L", &["Solo"], &mut rng),
            Err(LeagueError::InvalidTeamCount { found: 1 })
        ));

        let many: Vec<String> = (0..21).map(|i| format!("T{}", i)).collect();
        assert!(matches!(
            League::with_default_squads("L", &many, &mut rng),
            Err(LeagueError::InvalidTeamCount { found: 21 })
        ));

        let twenty: Vec<String> = (0..20).map(|i| format!("T{}", i)).collect();
        assert!(League::with_default_squads("L", &twenty, &mut rng).is_ok());
    }

    #[test]
    fn test_duplicate_team_rejected() {
        let mut rng = rng::seeded(1);
        let result = League::with_default_squads("L", &["A", "B", "A"], &mut rng);
        assert_eq!(result.unwrap_err(), LeagueError::DuplicateTeam("A".to_string()));
    }

    #[test]
    fn test_matchday_slicing() {
        let league = league(&["A", "B", "C", "D"], 5);
        assert_eq!(league.matches.len(), 12);
        assert_eq!(league.matches_per_matchday(), 2);
        assert_eq!(league.total_matchdays(), 6);
        assert_eq!(league.matchday_range(1), 0..2);
        assert_eq!(league.matchday_range(6), 10..12);
        assert!(league.matchday_fixtures(0).is_empty());
        assert!(league.matchday_fixtures(7).is_empty());
        assert!(!league.is_season_complete());
    }

    #[test]
    fn test_odd_team_count_matchdays() {
        let league = league(&["A", "B", "C"], 9);
        assert_eq!(league.matches.len(), 6);
        assert_eq!(league.matches_per_matchday(), 1);
        assert_eq!(league.total_matchdays(), 6);
    }

    #[test]
    fn test_lookup_helpers() {
        let league = league(&["A", "B"], 2);
        assert_eq!(league.team_index("B"), Some(1));
        assert!(league.team_by_name("Z").is_none());
        assert_eq!(league.players().count(), 22);
        let gk = league.player(PlayerRef::new(1, 0)).unwrap();
        assert_eq!(gk.name, "B_GK1");
        assert!(league.player(PlayerRef::new(2, 0)).is_none());
    }
}
