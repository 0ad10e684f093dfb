//! Text views of league state for the terminal.

use league_core::models::{League, Match, Player, PlayerRef, Team};
use league_core::Leaderboard;
use std::fmt;

/// Final score with scorers, assists and the stats panel.
pub struct MatchReport<'a> {
    pub fixture: &'a Match,
    pub teams: &'a [Team],
}

impl fmt::Display for MatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.fixture;
        let name = |idx: usize| self.teams.get(idx).map(|t| t.name.as_str()).unwrap_or("?");
        let player = |r: &PlayerRef| r.resolve(self.teams).map(|p| p.name.as_str()).unwrap_or("?");

        writeln!(f, "\nMatch Result:")?;
        writeln!(f, "{} {} - {} {}", name(m.home), m.home_goals, m.away_goals, name(m.away))?;

        if !m.scorers.is_empty() {
            writeln!(f, "\nScorers:")?;
            for scorer in &m.scorers {
                writeln!(f, "⚽ {}", player(scorer))?;
            }
        }
        if !m.assisters.is_empty() {
            writeln!(f, "\nAssists:")?;
            for assister in &m.assisters {
                writeln!(f, "👟 {}", player(assister))?;
            }
        }
        write!(f, "{}", StatsPanel(m))
    }
}

/// Side-by-side home/away statistics of one match.
pub struct StatsPanel<'a>(pub &'a Match);

impl fmt::Display for StatsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (home, away) = (&self.0.home_stats, &self.0.away_stats);

        writeln!(f, "\nMatch Statistics")?;
        writeln!(f, "{:<20} {:>6}  {:>6}", "", "HOME", "AWAY")?;
        writeln!(f, "{}", "-".repeat(36))?;
        percent_row(f, "Possession", home.possession, away.possession)?;
        count_row(f, "Shots", home.shots, away.shots)?;
        count_row(f, "Shots on Target", home.shots_on_target, away.shots_on_target)?;
        count_row(f, "Corners", home.corners, away.corners)?;
        count_row(f, "Passes", home.passes, away.passes)?;
        percent_row(f, "Pass Accuracy", home.pass_accuracy(), away.pass_accuracy())?;
        count_row(f, "Fouls", home.fouls, away.fouls)?;
        count_row(f, "Yellow Cards", home.yellow_cards, away.yellow_cards)?;
        count_row(f, "Red Cards", home.red_cards, away.red_cards)
    }
}

fn count_row(f: &mut fmt::Formatter, label: &str, home: u32, away: u32) -> fmt::Result {
    writeln!(f, "{:<20} {:>6}  {:>6}", label, home, away)
}

fn percent_row(f: &mut fmt::Formatter, label: &str, home: f64, away: f64) -> fmt::Result {
    writeln!(f, "{:<20} {:>5.1}%  {:>5.1}%", label, home, away)
}

pub struct StandingsView<'a>(pub &'a League);

impl fmt::Display for StandingsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\nLeague Table")?;
        writeln!(
            f,
            "{:<4} {:<20} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        )?;
        writeln!(f, "{}", "-".repeat(55))?;
        for (pos, team) in self.0.league_table().iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {:<20} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
                pos + 1,
                team.name,
                team.matches_played(),
                team.wins,
                team.draws,
                team.losses,
                team.goals_for,
                team.goals_against,
                team.goal_difference(),
                team.points
            )?;
        }
        Ok(())
    }
}

/// Every leaderboard, each cut to `limit` entries.
pub struct LeaderboardsView<'a> {
    pub league: &'a League,
    pub limit: usize,
}

impl fmt::Display for LeaderboardsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for board in Leaderboard::ALL {
            writeln!(f, "\n{}", board)?;
            for (pos, player) in self.league.leaderboard(board, self.limit).iter().enumerate() {
                writeln!(f, "{}. {:<20} {}", pos + 1, player.name, figure(board, player))?;
            }
        }
        Ok(())
    }
}

fn figure(board: Leaderboard, player: &Player) -> String {
    match board {
        Leaderboard::TopScorers => format!("{} goals", player.goals),
        Leaderboard::TopAssisters => format!("{} assists", player.assists),
        Leaderboard::CleanSheets => format!("{} clean sheets", player.clean_sheets),
        Leaderboard::Disciplinary => format!("{}🟨 {}🟥", player.yellow_cards, player.red_cards),
        Leaderboard::PassMasters => format!(
            "{:.1}% ({}/{})",
            player.pass_accuracy(),
            player.passes_completed,
            player.passes
        ),
    }
}

pub struct TeamDetail<'a>(pub &'a Team);

impl fmt::Display for TeamDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let team = self.0;
        writeln!(f, "\nTeam Statistics: {}", team.name)?;
        writeln!(f, "{:<25} {:>5.1}%", "Average Possession", team.average_possession())?;
        writeln!(f, "{:<25} {:>5.1}%", "Shot Accuracy", team.shot_accuracy())?;
        writeln!(f, "{:<25} {:>5.1}%", "Pass Accuracy", team.pass_accuracy())?;
        writeln!(f, "{:<25} {}", "Clean Sheets", team.clean_sheets)?;
        writeln!(f, "{:<25} {}", "Yellow Cards", team.yellow_cards)?;
        writeln!(f, "{:<25} {}", "Red Cards", team.red_cards)?;
        writeln!(f, "{:<25} {}", "Total Fouls", team.fouls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::{rng, MatchEngine};

    fn league_after(matchdays: u32) -> League {
        let mut rng = rng::seeded(3);
        let mut league = League::with_default_squads("View", &["Lions", "Tigers", "Bears", "Wolves"], &mut rng).unwrap();
        league.generate_fixtures(&mut rng);
        for _ in 0..matchdays {
            league.simulate_matchday(&MatchEngine::default(), &mut rng).unwrap();
        }
        league
    }

    #[test]
    fn test_match_report_lists_scorers() {
        let league = league_after(6);
        let m = league.matches.iter().find(|m| !m.scorers.is_empty()).unwrap();
        let text = MatchReport { fixture: m, teams: &league.teams }.to_string();

        let home = &league.teams[m.home].name;
        assert!(text.contains(&format!("{} {} - {}", home, m.home_goals, m.away_goals)));
        assert_eq!(text.matches("⚽").count(), m.scorers.len());
        assert!(text.contains("Match Statistics"));
        assert!(text.contains("Possession"));
    }

    #[test]
    fn test_standings_rows_follow_table() {
        let league = league_after(3);
        let text = StandingsView(&league).to_string();
        let leader = &league.league_table()[0].name;
        let first_row = text.lines().find(|l| l.trim_start().starts_with("1.")).unwrap();
        assert!(first_row.contains(leader.as_str()));
        assert_eq!(text.lines().filter(|l| l.contains(". ")).count(), 4);
    }

    #[test]
    fn test_leaderboards_show_every_board() {
        let league = league_after(6);
        let text = LeaderboardsView { league: &league, limit: 3 }.to_string();
        for board in Leaderboard::ALL {
            assert!(text.contains(board.title()));
        }
        assert!(text.contains("goals"));
        assert!(text.contains("🟨"));
    }

    #[test]
    fn test_team_detail() {
        let league = league_after(2);
        let text = TeamDetail(&league.teams[0]).to_string();
        assert!(text.contains("Team Statistics: Lions"));
        assert!(text.contains("Average Possession"));
        assert!(text.contains("Total Fouls"));
    }
}
