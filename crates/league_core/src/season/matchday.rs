use crate::engine::MatchEngine;
use crate::error::Result;
use crate::models::{League, Match};
use rand::Rng;

impl League {
    /// Simulate the next matchday's block of fixtures and return it.
    ///
    /// At season end nothing is simulated and the returned slice is empty.
    /// Every fixture of the block is checked before the first one is played,
    /// so a precondition failure leaves the league untouched.
    pub fn simulate_matchday<R: Rng + ?Sized>(
        &mut self,
        engine: &MatchEngine,
        rng: &mut R,
    ) -> Result<&[Match]> {
        if self.is_season_complete() {
            log::info!("Season '{}' is complete, no matchday to simulate", self.name);
            return Ok(&[]);
        }

        let matchday = self.current_matchday + 1;
        let range = self.matchday_range(matchday);
        for fixture in &self.matches[range.clone()] {
            engine.check_fixture(fixture, &self.teams)?;
        }

        log::info!(
            "Simulating matchday {}/{} ({} fixtures)",
            matchday,
            self.total_matchdays(),
            range.len()
        );
        for fixture in &mut self.matches[range.clone()] {
            engine.simulate(fixture, &mut self.teams, rng)?;
        }
        self.current_matchday = matchday;

        let goals: u32 = self.matches[range.clone()].iter().map(|m| m.home_goals + m.away_goals).sum();
        log::info!("Matchday {} finished: {} goals", matchday, goals);

        Ok(&self.matches[range])
    }

    /// Play every remaining matchday.
    pub fn simulate_season<R: Rng + ?Sized>(&mut self, engine: &MatchEngine, rng: &mut R) -> Result<()> {
        while !self.is_season_complete() {
            self.simulate_matchday(engine, rng)?;
        }
        Ok(())
    }
}
