use super::player::{percentage, Player, Position};
use crate::error::{LeagueError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating used for a team without players.
pub const DEFAULT_TEAM_RATING: f64 = 70.0;

/// Outfield layout of the standard squad: 4 defenders, 4 midfielders and
/// 2 forwards behind one goalkeeper.
const SQUAD_OUTFIELD: [Position; 10] = [
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::MID,
    Position::MID,
    Position::FWD,
    Position::FWD,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub total_shots: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub total_passes: u32,
    #[serde(default)]
    pub passes_completed: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub fouls: u32,
    #[serde(default)]
    pub possession_total: f64,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            clean_sheets: 0,
            total_shots: 0,
            shots_on_target: 0,
            total_passes: 0,
            passes_completed: 0,
            yellow_cards: 0,
            red_cards: 0,
            fouls: 0,
            possession_total: 0.0,
        }
    }

    /// Standard 11-player squad: `<name>_GK1` in goal and `<name>_P1` to
    /// `<name>_P10` in a 4-4-2 outfield.
    pub fn with_default_squad<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        let name = name.into();
        let mut players = Vec::with_capacity(SQUAD_OUTFIELD.len() + 1);
        players.push(Player::generate(format!("{}_GK1", name), name.clone(), Position::GK, rng));
        for (i, position) in SQUAD_OUTFIELD.iter().enumerate() {
            players.push(Player::generate(
                format!("{}_P{}", name, i + 1),
                name.clone(),
                *position,
                rng,
            ));
        }
        Self::new(name, players)
    }

    /// Roster contract: exactly one goalkeeper, at least one outfield player,
    /// unique player names and every player tagged with this team's name.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| LeagueError::InvalidRoster { team: self.name.clone(), reason };

        let gk_count = self.players.iter().filter(|p| p.position.is_goalkeeper()).count();
        if gk_count != 1 {
            return Err(invalid(format!("expected exactly 1 goalkeeper, found {}", gk_count)));
        }

        if self.outfield_count() == 0 {
            return Err(LeagueError::DegenerateRoster { team: self.name.clone() });
        }

        for (i, player) in self.players.iter().enumerate() {
            if player.team != self.name {
                return Err(invalid(format!(
                    "player {} belongs to team '{}'",
                    player.name, player.team
                )));
            }
            if self.players[..i].iter().any(|other| other.name == player.name) {
                return Err(invalid(format!("duplicate player name {}", player.name)));
            }
        }

        Ok(())
    }

    pub fn goalkeeper_index(&self) -> Option<usize> {
        self.players.iter().position(|p| p.position.is_goalkeeper())
    }

    /// Roster indices of every non-goalkeeper.
    pub fn outfield_indices(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position.is_outfield())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn outfield_count(&self) -> usize {
        self.players.iter().filter(|p| p.position.is_outfield()).count()
    }

    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Mean of `rating * form` over the roster.
    pub fn team_rating(&self) -> f64 {
        if self.players.is_empty() {
            return DEFAULT_TEAM_RATING;
        }
        let sum: f64 = self.players.iter().map(Player::effective_rating).sum();
        sum / self.players.len() as f64
    }

    pub fn average_possession(&self) -> f64 {
        let played = self.matches_played();
        if played == 0 {
            return 0.0;
        }
        self.possession_total / played as f64
    }

    pub fn shot_accuracy(&self) -> f64 {
        percentage(self.shots_on_target, self.total_shots)
    }

    pub fn pass_accuracy(&self) -> f64 {
        percentage(self.passes_completed, self.total_passes)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} pts)", self.name, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_default_squad_layout() {
        let mut rng = rng::seeded(11);
        let team = Team::with_default_squad("Lions", &mut rng);

        assert_eq!(team.players.len(), 11);
        assert_eq!(team.players[0].name, "Lions_GK1");
        assert!(team.players[0].position.is_goalkeeper());
        assert_eq!(team.players[10].name, "Lions_P10");
        assert_eq!(team.outfield_count(), 10);
        assert_eq!(team.players.iter().filter(|p| p.position == Position::DEF).count(), 4);
        assert_eq!(team.players.iter().filter(|p| p.position == Position::MID).count(), 4);
        assert_eq!(team.players.iter().filter(|p| p.position == Position::FWD).count(), 2);
        assert!(team.players.iter().all(|p| p.team == "Lions"));
        assert!(team.validate().is_ok());
    }

    #[test]
    fn test_team_rating_mean_of_effective_ratings() {
        let players = vec![
            Player::new("G", "T", Position::GK, 80.0, 1.0),
            Player::new("A", "T", Position::FWD, 60.0, 1.2),
        ];
        let team = Team::new("T", players);
        assert!((team.team_rating() - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_roster_rating_default() {
        let team = Team::new("Empty", Vec::new());
        assert_eq!(team.team_rating(), DEFAULT_TEAM_RATING);
    }

    #[test]
    fn test_derived_totals() {
        let mut team = Team::new("T", Vec::new());
        assert_eq!(team.average_possession(), 0.0);
        assert_eq!(team.shot_accuracy(), 0.0);
        assert_eq!(team.pass_accuracy(), 0.0);

        team.wins = 2;
        team.draws = 1;
        team.losses = 1;
        team.goals_for = 3;
        team.goals_against = 7;
        team.possession_total = 220.0;
        team.total_shots = 40;
        team.shots_on_target = 10;

        assert_eq!(team.matches_played(), 4);
        assert_eq!(team.goal_difference(), -4);
        assert!((team.average_possession() - 55.0).abs() < 1e-9);
        assert!((team.shot_accuracy() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_rosters() {
        let no_gk = Team::new("T", vec![Player::new("A", "T", Position::MID, 70.0, 1.0)]);
        assert!(matches!(no_gk.validate(), Err(LeagueError::InvalidRoster { .. })));

        let only_gk = Team::new("T", vec![Player::new("G", "T", Position::GK, 70.0, 1.0)]);
        assert!(matches!(only_gk.validate(), Err(LeagueError::DegenerateRoster { .. })));

        let wrong_team = Team::new(
            "T",
            vec![
                Player::new("G", "T", Position::GK, 70.0, 1.0),
                Player::new("A", "Other", Position::MID, 70.0, 1.0),
            ],
        );
        assert!(wrong_team.validate().is_err());

        let duplicate = Team::new(
            "T",
            vec![
                Player::new("G", "T", Position::GK, 70.0, 1.0),
                Player::new("A", "T", Position::MID, 70.0, 1.0),
                Player::new("A", "T", Position::FWD, 70.0, 1.0),
            ],
        );
        assert!(duplicate.validate().is_err());
    }
}
