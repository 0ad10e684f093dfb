//! # Match Outcome Engine
//!
//! Statistical single-match model. Each stage only reads what earlier stages
//! produced, so team ratings flow through the whole chain:
//!
//! 1. possession from the rating difference
//! 2. shots from possession, shots on target from shots
//! 3. goals from shots on target
//! 4. corners, fouls, cards and passes
//! 5. result and league points
//! 6. scorer and assist attribution
//! 7. clean sheets
//! 8. player involvement (minutes, passes, bookings)
//!
//! All team and player state is touched only after the precondition checks
//! pass, and a completed match is never simulated again.

use super::config::{EngineConfig, NormalParams, SideConfig, UniformRange};
use crate::error::{LeagueError, Result};
use crate::models::{Match, MatchStats, PlayerRef, Team};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Possession at which the configured shot means apply unscaled.
const EVEN_POSSESSION: f64 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: EngineConfig,
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Preconditions for simulating `fixture` against `teams`: two distinct
    /// teams that exist and can both field an outfield scorer.
    pub fn check_fixture(&self, fixture: &Match, teams: &[Team]) -> Result<()> {
        if fixture.home == fixture.away {
            return Err(LeagueError::InvalidFixture(format!(
                "team {} cannot play itself",
                fixture.home
            )));
        }
        for idx in [fixture.home, fixture.away] {
            let team = teams.get(idx).ok_or_else(|| {
                LeagueError::InvalidFixture(format!(
                    "team index {} out of range ({} teams)",
                    idx,
                    teams.len()
                ))
            })?;
            if team.outfield_count() == 0 {
                return Err(LeagueError::DegenerateRoster { team: team.name.clone() });
            }
        }
        Ok(())
    }

    /// Play `fixture`, updating the match record and both teams in `teams`.
    ///
    /// Returns `Ok(false)` without touching anything when the match is already
    /// completed.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        fixture: &mut Match,
        teams: &mut [Team],
        rng: &mut R,
    ) -> Result<bool> {
        if fixture.completed {
            return Ok(false);
        }
        self.check_fixture(fixture, teams)?;

        let cfg = &self.config;
        let (home, away) = pair_mut(teams, fixture.home, fixture.away);

        // 1. Possession
        let home_possession = (cfg.possession_base
            + (home.team_rating() - away.team_rating()) / cfg.possession_rating_divisor)
            .clamp(cfg.possession_min, cfg.possession_max);
        let away_possession = 100.0 - home_possession;

        let mut home_stats = MatchStats { possession: home_possession, ..MatchStats::default() };
        let mut away_stats = MatchStats { possession: away_possession, ..MatchStats::default() };
        home.possession_total += home_possession;
        away.possession_total += away_possession;

        // 2. Shots
        home_stats.shots = draw_shots(&cfg.home, home_possession, rng)?;
        away_stats.shots = draw_shots(&cfg.away, away_possession, rng)?;
        home_stats.shots_on_target = scale_count(home_stats.shots, cfg.home.on_target_ratio, rng);
        away_stats.shots_on_target = scale_count(away_stats.shots, cfg.away.on_target_ratio, rng);
        record_shots(home, &home_stats);
        record_shots(away, &away_stats);

        // 3. Goals
        let home_goals = draw_goals(&cfg.home, home_stats.shots_on_target, rng)?;
        let away_goals = draw_goals(&cfg.away, away_stats.shots_on_target, rng)?;

        // 4. Secondary events
        home_stats.corners = draw_count(cfg.home.corners, rng)?;
        away_stats.corners = draw_count(cfg.away.corners, rng)?;
        home_stats.fouls = draw_count(cfg.home.fouls, rng)?;
        away_stats.fouls = draw_count(cfg.away.fouls, rng)?;
        home_stats.yellow_cards = yellow_cards(&cfg.home, home_stats.fouls, cfg.max_yellow_cards);
        away_stats.yellow_cards = yellow_cards(&cfg.away, away_stats.fouls, cfg.max_yellow_cards);
        home_stats.red_cards = u32::from(rng.gen_bool(cfg.home.red_card_chance));
        away_stats.red_cards = u32::from(rng.gen_bool(cfg.away.red_card_chance));
        home_stats.passes = truncate_count(home_possession * cfg.passes_per_possession_point);
        away_stats.passes = truncate_count(away_possession * cfg.passes_per_possession_point);
        home_stats.passes_completed = scale_count(home_stats.passes, cfg.home.pass_completion, rng);
        away_stats.passes_completed = scale_count(away_stats.passes, cfg.away.pass_completion, rng);
        record_discipline_and_passing(home, &home_stats);
        record_discipline_and_passing(away, &away_stats);

        // 5. Result and points
        home.goals_for += home_goals;
        home.goals_against += away_goals;
        away.goals_for += away_goals;
        away.goals_against += home_goals;
        if home_goals > away_goals {
            home.points += 3;
            home.wins += 1;
            away.losses += 1;
        } else if away_goals > home_goals {
            away.points += 3;
            away.wins += 1;
            home.losses += 1;
        } else {
            home.points += 1;
            away.points += 1;
            home.draws += 1;
            away.draws += 1;
        }

        // 6. Attribution, home goals first
        let mut scorers = Vec::with_capacity((home_goals + away_goals) as usize);
        let mut assisters = Vec::new();
        for (team_idx, team, goals) in
            [(fixture.home, &mut *home, home_goals), (fixture.away, &mut *away, away_goals)]
        {
            for _ in 0..goals {
                attribute_goal(team_idx, team, cfg.assist_chance, &mut scorers, &mut assisters, rng)?;
            }
        }

        // 7. Clean sheets
        if away_goals == 0 {
            credit_clean_sheet(home);
        }
        if home_goals == 0 {
            credit_clean_sheet(away);
        }

        // 8. Player involvement
        credit_involvement(home, &home_stats, cfg.minutes_per_match, rng);
        credit_involvement(away, &away_stats, cfg.minutes_per_match, rng);

        log::debug!(
            "{} {} - {} {} (possession {:.1}%, shots {}-{})",
            home.name,
            home_goals,
            away_goals,
            away.name,
            home_possession,
            home_stats.shots,
            away_stats.shots
        );

        fixture.home_goals = home_goals;
        fixture.away_goals = away_goals;
        fixture.scorers = scorers;
        fixture.assisters = assisters;
        fixture.home_stats = home_stats;
        fixture.away_stats = away_stats;
        fixture.completed = true;
        Ok(true)
    }
}

/// Two distinct mutable teams out of one slice. Callers guarantee `a != b`
/// and both indices in range.
fn pair_mut(teams: &mut [Team], a: usize, b: usize) -> (&mut Team, &mut Team) {
    if a < b {
        let (left, right) = teams.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

fn normal<R: Rng + ?Sized>(mean: f64, sd: f64, rng: &mut R) -> Result<f64> {
    let dist = Normal::new(mean, sd).map_err(|e| {
        LeagueError::InvalidConfig(format!("normal(mean={}, sd={}): {}", mean, sd, e))
    })?;
    Ok(dist.sample(rng))
}

/// Integer part of a draw; negative draws count as zero rather than being
/// resampled.
fn truncate_count(value: f64) -> u32 {
    value.max(0.0).trunc() as u32
}

fn draw_count<R: Rng + ?Sized>(params: NormalParams, rng: &mut R) -> Result<u32> {
    Ok(truncate_count(normal(params.mean, params.sd, rng)?))
}

fn draw_shots<R: Rng + ?Sized>(side: &SideConfig, possession: f64, rng: &mut R) -> Result<u32> {
    let mean = side.shots_at_even_possession * possession / EVEN_POSSESSION;
    Ok(truncate_count(normal(mean, side.shots_sd, rng)?))
}

fn draw_goals<R: Rng + ?Sized>(side: &SideConfig, shots_on_target: u32, rng: &mut R) -> Result<u32> {
    let mean = shots_on_target as f64 * side.goals_per_shot_on_target;
    Ok(normal(mean, side.goals_sd, rng)?.round().max(0.0) as u32)
}

/// `count` scaled by a uniform ratio from `range`; never exceeds `count` for
/// ratio ranges inside `[0, 1]`.
fn scale_count<R: Rng + ?Sized>(count: u32, range: UniformRange, rng: &mut R) -> u32 {
    let ratio = rng.gen_range(range.min..range.max);
    truncate_count(count as f64 * ratio).min(count)
}

fn yellow_cards(side: &SideConfig, fouls: u32, cap: u32) -> u32 {
    truncate_count(fouls as f64 * side.yellows_per_foul).min(cap)
}

fn record_shots(team: &mut Team, stats: &MatchStats) {
    team.total_shots += stats.shots;
    team.shots_on_target += stats.shots_on_target;
}

fn record_discipline_and_passing(team: &mut Team, stats: &MatchStats) {
    team.yellow_cards += stats.yellow_cards;
    team.red_cards += stats.red_cards;
    team.fouls += stats.fouls;
    team.total_passes += stats.passes;
    team.passes_completed += stats.passes_completed;
}

fn attribute_goal<R: Rng + ?Sized>(
    team_idx: usize,
    team: &mut Team,
    assist_chance: f64,
    scorers: &mut Vec<PlayerRef>,
    assisters: &mut Vec<PlayerRef>,
    rng: &mut R,
) -> Result<()> {
    let outfield = team.outfield_indices();
    let scorer = *outfield
        .choose(rng)
        .ok_or_else(|| LeagueError::DegenerateRoster { team: team.name.clone() })?;

    let player = &mut team.players[scorer];
    player.goals += 1;
    player.shots += 1;
    player.shots_on_target += 1;
    scorers.push(PlayerRef::new(team_idx, scorer));

    if rng.gen_bool(assist_chance) {
        let candidates: Vec<usize> = outfield.into_iter().filter(|&i| i != scorer).collect();
        if let Some(&assister) = candidates.choose(rng) {
            team.players[assister].assists += 1;
            assisters.push(PlayerRef::new(team_idx, assister));
        }
    }
    Ok(())
}

fn credit_clean_sheet(team: &mut Team) {
    team.clean_sheets += 1;
    if let Some(gk) = team.goalkeeper_index() {
        team.players[gk].clean_sheets += 1;
    }
}

/// Minutes for the whole roster, the side's passes dealt out one by one (the
/// first `passes_completed` of them completed) and each booking given to an
/// outfield player.
fn credit_involvement<R: Rng + ?Sized>(team: &mut Team, stats: &MatchStats, minutes: u32, rng: &mut R) {
    let roster_size = team.players.len();
    if roster_size == 0 {
        return;
    }

    for player in &mut team.players {
        player.minutes_played += minutes;
    }

    for pass in 0..stats.passes {
        let player = &mut team.players[rng.gen_range(0..roster_size)];
        player.passes += 1;
        if pass < stats.passes_completed {
            player.passes_completed += 1;
        }
    }

    let outfield = team.outfield_indices();
    for _ in 0..stats.yellow_cards {
        if let Some(&idx) = outfield.choose(rng) {
            team.players[idx].yellow_cards += 1;
        }
    }
    for _ in 0..stats.red_cards {
        if let Some(&idx) = outfield.choose(rng) {
            team.players[idx].red_cards += 1;
        }
    }
}
