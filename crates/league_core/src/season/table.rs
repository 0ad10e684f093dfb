use crate::models::{League, Team};
use std::cmp::Reverse;

impl League {
    /// Standings ordered by points, then goal difference, then goals scored.
    /// Teams still level keep their order in `teams`.
    pub fn league_table(&self) -> Vec<&Team> {
        let mut table: Vec<&Team> = self.teams.iter().collect();
        table.sort_by_key(|t| Reverse((t.points, t.goal_difference(), t.goals_for)));
        table
    }

    /// 1-based table position of the named team.
    pub fn table_position(&self, team_name: &str) -> Option<usize> {
        self.league_table().iter().position(|t| t.name == team_name).map(|p| p + 1)
    }
}
