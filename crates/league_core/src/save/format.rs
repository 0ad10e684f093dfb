//! JSON save document.
//!
//! The document is self-contained: every match embeds full snapshots of both
//! teams (rosters included) and of each scorer and assister. Snapshots are
//! taken from the live league when encoding and resolved back to team and
//! player indices by name when decoding.

use super::error::SaveError;
use crate::models::league::validate_teams;
use crate::models::{League, Match, MatchStats, Player, PlayerRef, Team};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeagueDocument {
    pub name: String,
    pub teams: Vec<Team>,
    pub matches: Vec<MatchDocument>,
    pub current_matchday: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchDocument {
    pub home_team: Team,
    pub away_team: Team,
    pub home_goals: u32,
    pub away_goals: u32,
    pub scorers: Vec<Player>,
    pub assisters: Vec<Player>,
    pub home_stats: MatchStats,
    pub away_stats: MatchStats,
    pub completed: bool,
}

impl LeagueDocument {
    /// Snapshot of `league`. Fails only when a match points outside the team
    /// list.
    pub fn from_league(league: &League) -> Result<Self, SaveError> {
        let team = |idx: usize| {
            league.teams.get(idx).cloned().ok_or_else(|| {
                SaveError::Inconsistent(format!("match refers to missing team index {}", idx))
            })
        };
        let players = |refs: &[PlayerRef]| -> Result<Vec<Player>, SaveError> {
            refs.iter()
                .map(|r| {
                    league.player(*r).cloned().ok_or_else(|| {
                        SaveError::Inconsistent(format!(
                            "match refers to missing player {} of team {}",
                            r.player, r.team
                        ))
                    })
                })
                .collect()
        };

        let matches = league
            .matches
            .iter()
            .map(|m| {
                Ok(MatchDocument {
                    home_team: team(m.home)?,
                    away_team: team(m.away)?,
                    home_goals: m.home_goals,
                    away_goals: m.away_goals,
                    scorers: players(&m.scorers)?,
                    assisters: players(&m.assisters)?,
                    home_stats: m.home_stats.clone(),
                    away_stats: m.away_stats.clone(),
                    completed: m.completed,
                })
            })
            .collect::<Result<Vec<_>, SaveError>>()?;

        Ok(Self {
            name: league.name.clone(),
            teams: league.teams.clone(),
            matches,
            current_matchday: league.current_matchday,
        })
    }

    /// Rebuild the live league. Either the whole document resolves or
    /// nothing is returned.
    pub fn into_league(self) -> Result<League, SaveError> {
        validate_teams(&self.teams).map_err(|e| SaveError::Inconsistent(e.to_string()))?;

        let team_index = |name: &str| {
            self.teams
                .iter()
                .position(|t| t.name == name)
                .ok_or_else(|| SaveError::Inconsistent(format!("unknown team '{}'", name)))
        };
        let player_ref = |player: &Player| -> Result<PlayerRef, SaveError> {
            let team = team_index(&player.team)?;
            let idx = self.teams[team].player_index(&player.name).ok_or_else(|| {
                SaveError::Inconsistent(format!(
                    "unknown player '{}' in team '{}'",
                    player.name, player.team
                ))
            })?;
            Ok(PlayerRef::new(team, idx))
        };

        let mut matches = Vec::with_capacity(self.matches.len());
        for doc in &self.matches {
            let home = team_index(&doc.home_team.name)?;
            let away = team_index(&doc.away_team.name)?;
            if home == away {
                return Err(SaveError::Inconsistent(format!(
                    "team '{}' plays itself",
                    doc.home_team.name
                )));
            }
            matches.push(Match {
                home,
                away,
                home_goals: doc.home_goals,
                away_goals: doc.away_goals,
                scorers: doc.scorers.iter().map(player_ref).collect::<Result<_, _>>()?,
                assisters: doc.assisters.iter().map(player_ref).collect::<Result<_, _>>()?,
                home_stats: doc.home_stats.clone(),
                away_stats: doc.away_stats.clone(),
                completed: doc.completed,
            });
        }

        let league = League {
            name: self.name,
            teams: self.teams,
            matches,
            current_matchday: self.current_matchday,
        };
        if league.current_matchday > league.total_matchdays() {
            return Err(SaveError::Inconsistent(format!(
                "current matchday {} beyond the {} scheduled",
                league.current_matchday,
                league.total_matchdays()
            )));
        }
        Ok(league)
    }
}

pub fn to_json(league: &League) -> Result<String, SaveError> {
    let doc = LeagueDocument::from_league(league)?;
    serde_json::to_string_pretty(&doc).map_err(SaveError::Serialization)
}

pub fn from_json(json: &str) -> Result<League, SaveError> {
    let doc: LeagueDocument = serde_json::from_str(json).map_err(SaveError::Malformed)?;
    doc.into_league()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchEngine;
    use crate::rng;

    fn played_league(seed: u64, matchdays: u32) -> League {
        let mut rng = rng::seeded(seed);
        let mut league = League::with_default_squads("Save Test", &["A", "B", "C", "D"], &mut rng).unwrap();
        league.generate_fixtures(&mut rng);
        let engine = MatchEngine::default();
        for _ in 0..matchdays {
            league.simulate_matchday(&engine, &mut rng).unwrap();
        }
        league
    }

    #[test]
    fn test_roundtrip_mid_season() {
        let league = played_league(5, 3);
        let json = to_json(&league).unwrap();
        let back = from_json(&json).unwrap();
        assert_eq!(back, league);
        assert_eq!(to_json(&back).unwrap(), json);
    }

    #[test]
    fn test_roundtrip_fresh_and_finished() {
        for matchdays in [0, 6] {
            let league = played_league(9, matchdays);
            assert_eq!(from_json(&to_json(&league).unwrap()).unwrap(), league);
        }
    }

    #[test]
    fn test_document_embeds_snapshots() {
        let league = played_league(2, 1);
        let doc = LeagueDocument::from_league(&league).unwrap();
        let first = &league.matches[0];
        assert_eq!(doc.matches[0].home_team, league.teams[first.home]);
        assert_eq!(doc.matches[0].away_team.players.len(), 11);
        assert_eq!(doc.matches[0].scorers.len(), first.scorers.len());

        let value: serde_json::Value = serde_json::from_str(&to_json(&league).unwrap()).unwrap();
        for key in ["name", "teams", "matches", "current_matchday"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["teams"][0]["players"][0]["position"], "GK");
        assert!(value["matches"][0]["home_team"]["players"].is_array());
    }

    #[test]
    fn test_syntax_error_is_malformed() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, SaveError::Malformed(_)));
        assert!(err.is_malformed());

        let err = from_json(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, SaveError::Malformed(_)));
    }

    #[test]
    fn test_unknown_team_is_inconsistent() {
        let league = played_league(3, 1);
        let mut doc = LeagueDocument::from_league(&league).unwrap();
        doc.matches[4].away_team.name = "Ghosts".to_string();
        let json = serde_json::to_string(&doc).unwrap();

        let err = from_json(&json).unwrap_err();
        assert!(matches!(err, SaveError::Inconsistent(ref msg) if msg.contains("Ghosts")));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_unknown_scorer_is_inconsistent() {
        let league = played_league(4, 6);
        let mut doc = LeagueDocument::from_league(&league).unwrap();
        let m = doc.matches.iter_mut().find(|m| !m.scorers.is_empty()).unwrap();
        m.scorers[0].name = "Nobody".to_string();

        assert!(matches!(doc.into_league(), Err(SaveError::Inconsistent(_))));
    }

    #[test]
    fn test_invalid_roster_is_inconsistent() {
        let league = played_league(1, 0);
        let mut doc = LeagueDocument::from_league(&league).unwrap();
        doc.teams[1].players.retain(|p| p.position.is_goalkeeper());
        assert!(matches!(doc.into_league(), Err(SaveError::Inconsistent(_))));
    }

    #[test]
    fn test_matchday_beyond_schedule_is_inconsistent() {
        let league = played_league(1, 0);
        let mut doc = LeagueDocument::from_league(&league).unwrap();
        doc.current_matchday = 7;
        assert!(doc.into_league().is_err());
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let json = r#"{
            "name": "Minimal",
            "teams": [
                {"name": "A", "players": [
                    {"name": "A_GK1", "team": "A", "position": "GK", "rating": 70.0, "form": 1.0},
                    {"name": "A_P1", "team": "A", "position": "FWD", "rating": 75.0, "form": 1.0}
                ]},
                {"name": "B", "players": [
                    {"name": "B_GK1", "team": "B", "position": "GK", "rating": 70.0, "form": 1.0},
                    {"name": "B_P1", "team": "B", "position": "MID", "rating": 65.0, "form": 1.1}
                ]}
            ],
            "matches": [],
            "current_matchday": 0
        }"#;
        let league = from_json(json).unwrap();
        assert_eq!(league.teams.len(), 2);
        assert_eq!(league.teams[0].points, 0);
        assert_eq!(league.teams[1].players[1].goals, 0);
        assert!(league.matches.is_empty());
    }
}
