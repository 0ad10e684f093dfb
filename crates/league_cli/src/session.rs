//! Interactive season: load or create a league, then play it matchday by
//! matchday from a menu.

use crate::display::{LeaderboardsView, MatchReport, StandingsView, TeamDetail};
use crate::prompt::Prompter;
use anyhow::Result;
use league_core::rng::SimRng;
use league_core::{League, MatchEngine, SaveManager, DEFAULT_LEADERBOARD_LIMIT};
use std::io::{BufRead, Write};
use std::path::Path;

const LOAD_MENU: [&str; 3] = ["Start New League", "Load Latest Save", "Choose Save File"];

const MAIN_MENU: [&str; 6] = [
    "Simulate next matchday",
    "View league table",
    "View statistics",
    "View team details",
    "Save game",
    "Exit",
];

pub struct Session<R, W> {
    pub prompter: Prompter<R, W>,
    pub saves: SaveManager,
    pub engine: MatchEngine,
    pub rng: SimRng,
    pub league_name: String,
    /// Team names given up front; skips the team prompt for a new league.
    pub preset_teams: Option<Vec<String>>,
}

/// Unwraps a prompt answer, leaving the session when input has ended.
macro_rules! answer {
    ($self:ident, $prompt:expr) => {
        match $prompt {
            Some(value) => value,
            None => return $self.leave(),
        }
    };
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn run(mut self) -> Result<()> {
        writeln!(self.prompter.output(), "⚽ Welcome to the League Simulator!")?;

        let mut league = answer!(self, self.load_or_new()?);
        if league.matches.is_empty() {
            league.generate_fixtures(&mut self.rng);
        }
        // A finished season loaded from disk is already saved.
        let finished_on_load = league.is_season_complete();

        while !league.is_season_complete() {
            let choice = answer!(self, self.prompter.select("What would you like to do?", &MAIN_MENU)?);
            match choice {
                0 => self.play_matchday(&mut league)?,
                1 => write!(self.prompter.output(), "{}", StandingsView(&league))?,
                2 => write!(
                    self.prompter.output(),
                    "{}",
                    LeaderboardsView { league: &league, limit: DEFAULT_LEADERBOARD_LIMIT }
                )?,
                3 => {
                    let names: Vec<&str> = league.teams.iter().map(|t| t.name.as_str()).collect();
                    let idx = answer!(self, self.prompter.select("Select a team:", &names)?);
                    write!(self.prompter.output(), "{}", TeamDetail(&league.teams[idx]))?;
                }
                4 => self.save(&league)?,
                _ => {
                    if league.current_matchday > 0 {
                        let save = answer!(
                            self,
                            self.prompter.confirm("Would you like to save before exiting?", true)?
                        );
                        if save {
                            self.save(&league)?;
                        }
                    }
                    return self.leave();
                }
            }
        }

        let out = self.prompter.output();
        writeln!(out, "\n🏆 Season completed!\n\nFinal Results:")?;
        write!(out, "{}", StandingsView(&league))?;
        write!(out, "{}", LeaderboardsView { league: &league, limit: DEFAULT_LEADERBOARD_LIMIT })?;
        if finished_on_load {
            return Ok(());
        }

        let save = answer!(self, self.prompter.confirm("Would you like to save this completed season?", true)?);
        if save {
            self.save(&league)?;
        }
        Ok(())
    }

    fn load_or_new(&mut self) -> Result<Option<League>> {
        let saves = self.saves.list_saves()?;
        if saves.is_empty() {
            writeln!(self.prompter.output(), "No saved leagues found. Starting a new league...")?;
            return self.new_league();
        }

        loop {
            let Some(choice) = self.prompter.select(
                "Would you like to load a saved league or start a new one?",
                &LOAD_MENU,
            )?
            else {
                return Ok(None);
            };
            let path = match choice {
                0 => return self.new_league(),
                1 => saves.last().cloned(),
                _ => {
                    let names: Vec<String> = saves.iter().map(|p| file_name(p)).collect();
                    match self.prompter.select("Choose a save file:", &names)? {
                        Some(idx) => Some(saves[idx].clone()),
                        None => return Ok(None),
                    }
                }
            };
            let Some(path) = path else {
                return self.new_league();
            };

            match SaveManager::load(&path) {
                Ok(league) => {
                    writeln!(
                        self.prompter.output(),
                        "Loaded '{}' at matchday {}/{}",
                        league.name,
                        league.current_matchday,
                        league.total_matchdays()
                    )?;
                    return Ok(Some(league));
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", path.display(), e);
                    writeln!(self.prompter.output(), "❌ Could not load {}: {}", file_name(&path), e)?;
                }
            }
        }
    }

    fn new_league(&mut self) -> Result<Option<League>> {
        let names = match self.preset_teams.take() {
            Some(names) => names,
            None => match self.prompter.team_names()? {
                Some(names) => names,
                None => return Ok(None),
            },
        };
        let league = League::with_default_squads(self.league_name.clone(), &names, &mut self.rng)?;
        Ok(Some(league))
    }

    fn play_matchday(&mut self, league: &mut League) -> Result<()> {
        let matchday = league.current_matchday + 1;
        writeln!(self.prompter.output(), "\nSimulating Matchday {}/{}", matchday, league.total_matchdays())?;

        league.simulate_matchday(&self.engine, &mut self.rng)?;
        let fixtures = league.matchday_fixtures(matchday);
        for fixture in fixtures {
            write!(self.prompter.output(), "{}", MatchReport { fixture, teams: &league.teams })?;
        }

        writeln!(self.prompter.output(), "\nMatchday {} results:", matchday)?;
        for fixture in fixtures {
            writeln!(self.prompter.output(), "  {}", fixture.describe(&league.teams))?;
        }
        Ok(())
    }

    fn save(&mut self, league: &League) -> Result<()> {
        match self.saves.save(league) {
            Ok(path) => writeln!(self.prompter.output(), "\n💾 Game saved to: {}", path.display())?,
            Err(e) => {
                log::error!("Save failed: {}", e);
                writeln!(self.prompter.output(), "\n❌ Save failed: {}", e)?;
            }
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        writeln!(self.prompter.output(), "\nExiting...")?;
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
