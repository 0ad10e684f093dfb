//! Player leaderboards.
//!
//! Every board is a stable descending sort over all rostered players (team
//! order, then roster order) truncated to a caller-chosen length, so players
//! with equal figures keep their roster order.

use crate::models::{League, Player};
use std::fmt;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

/// Career passes needed to appear among the pass masters.
pub const PASS_MASTER_MIN_PASSES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaderboard {
    TopScorers,
    TopAssisters,
    /// Goalkeepers only.
    CleanSheets,
    /// Ranked by yellow cards plus two points per red card.
    Disciplinary,
    /// Pass accuracy among players with at least
    /// [`PASS_MASTER_MIN_PASSES`] passes.
    PassMasters,
}

impl Leaderboard {
    pub const ALL: [Leaderboard; 5] = [
        Leaderboard::TopScorers,
        Leaderboard::TopAssisters,
        Leaderboard::CleanSheets,
        Leaderboard::Disciplinary,
        Leaderboard::PassMasters,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Leaderboard::TopScorers => "Top Scorers",
            Leaderboard::TopAssisters => "Top Assisters",
            Leaderboard::CleanSheets => "Clean Sheets",
            Leaderboard::Disciplinary => "Disciplinary Table",
            Leaderboard::PassMasters => "Pass Masters (min. 100 passes)",
        }
    }

    pub fn is_eligible(&self, player: &Player) -> bool {
        match self {
            Leaderboard::CleanSheets => player.position.is_goalkeeper(),
            Leaderboard::PassMasters => player.passes >= PASS_MASTER_MIN_PASSES,
            _ => true,
        }
    }

    /// Value the board ranks on, higher first.
    pub fn metric(&self, player: &Player) -> f64 {
        match self {
            Leaderboard::TopScorers => player.goals as f64,
            Leaderboard::TopAssisters => player.assists as f64,
            Leaderboard::CleanSheets => player.clean_sheets as f64,
            Leaderboard::Disciplinary => player.disciplinary_points() as f64,
            Leaderboard::PassMasters => player.pass_accuracy(),
        }
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl League {
    pub fn leaderboard(&self, board: Leaderboard, limit: usize) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players().filter(|p| board.is_eligible(p)).collect();
        ranked.sort_by(|a, b| board.metric(b).total_cmp(&board.metric(a)));
        ranked.truncate(limit);
        ranked
    }

    pub fn top_scorers(&self, limit: usize) -> Vec<&Player> {
        self.leaderboard(Leaderboard::TopScorers, limit)
    }

    pub fn top_assisters(&self, limit: usize) -> Vec<&Player> {
        self.leaderboard(Leaderboard::TopAssisters, limit)
    }

    pub fn top_clean_sheets(&self, limit: usize) -> Vec<&Player> {
        self.leaderboard(Leaderboard::CleanSheets, limit)
    }

    pub fn disciplinary_table(&self, limit: usize) -> Vec<&Player> {
        self.leaderboard(Leaderboard::Disciplinary, limit)
    }

    pub fn pass_masters(&self, limit: usize) -> Vec<&Player> {
        self.leaderboard(Leaderboard::PassMasters, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    fn league() -> League {
        let mut rng = rng::seeded(7);
        League::with_default_squads("L", &["A", "B"], &mut rng).unwrap()
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_top_scorers_ranked_and_limited() {
        let mut league = league();
        league.teams[0].players[3].goals = 4;
        league.teams[1].players[9].goals = 7;
        league.teams[1].players[2].goals = 4;

        let top = league.top_scorers(DEFAULT_LEADERBOARD_LIMIT);
        assert_eq!(top.len(), 5);
        assert_eq!(names(&top[..3]), ["B_P9", "A_P3", "B_P2"]);
        assert_eq!(league.top_scorers(1).len(), 1);
        assert!(league.top_scorers(0).is_empty());
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let league = league();
        let top = league.top_assisters(3);
        assert_eq!(names(&top), ["A_GK1", "A_P1", "A_P2"]);
    }

    #[test]
    fn test_clean_sheets_only_goalkeepers() {
        let mut league = league();
        league.teams[0].players[5].clean_sheets = 10;
        league.teams[1].players[0].clean_sheets = 2;

        let board = league.top_clean_sheets(5);
        assert_eq!(names(&board), ["B_GK1", "A_GK1"]);
    }

    #[test]
    fn test_disciplinary_weights_reds_double() {
        let mut league = league();
        league.teams[0].players[1].yellow_cards = 3;
        league.teams[0].players[2].red_cards = 2;
        league.teams[1].players[4].yellow_cards = 1;
        league.teams[1].players[4].red_cards = 1;

        let board = league.disciplinary_table(3);
        assert_eq!(names(&board), ["A_P2", "A_P1", "B_P4"]);
    }

    #[test]
    fn test_pass_masters_need_minimum_passes() {
        let mut league = league();
        let p = &mut league.teams[0].players[6];
        p.passes = 99;
        p.passes_completed = 99;
        let p = &mut league.teams[1].players[7];
        p.passes = 200;
        p.passes_completed = 150;
        let p = &mut league.teams[1].players[8];
        p.passes = 100;
        p.passes_completed = 90;

        let board = league.pass_masters(5);
        assert_eq!(names(&board), ["B_P8", "B_P7"]);
    }

    #[test]
    fn test_board_metadata() {
        assert_eq!(Leaderboard::ALL.len(), 5);
        assert_eq!(Leaderboard::Disciplinary.to_string(), "Disciplinary Table");
        let league = league();
        let gk = &league.teams[0].players[0];
        assert!(Leaderboard::CleanSheets.is_eligible(gk));
        assert!(!Leaderboard::CleanSheets.is_eligible(&league.teams[0].players[1]));
    }
}
