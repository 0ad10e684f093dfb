//! Per-side distribution parameters.

use serde::{Deserialize, Serialize};

/// Half-open interval `[min, max)` for uniform draws.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Valid and contained in `[0, 1]`.
    pub fn is_ratio(&self) -> bool {
        self.is_valid() && self.min >= 0.0 && self.max <= 1.0
    }
}

/// Mean and standard deviation of a normal draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalParams {
    pub mean: f64,
    pub sd: f64,
}

impl NormalParams {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    pub fn is_valid(&self) -> bool {
        self.mean.is_finite() && self.sd.is_finite() && self.sd >= 0.0
    }
}

/// Everything that differs between the home and the away side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SideConfig {
    /// Shots at 50% possession; scaled linearly with the side's possession.
    pub shots_at_even_possession: f64,
    pub shots_sd: f64,
    /// Fraction of shots that are on target.
    pub on_target_ratio: UniformRange,
    /// Expected goals per shot on target.
    pub goals_per_shot_on_target: f64,
    pub goals_sd: f64,
    pub corners: NormalParams,
    pub fouls: NormalParams,
    /// Yellow cards per foul before truncation and capping.
    pub yellows_per_foul: f64,
    /// Chance of one red card in the match.
    pub red_card_chance: f64,
    pub pass_completion: UniformRange,
}

impl SideConfig {
    pub fn home() -> Self {
        Self {
            shots_at_even_possession: 12.0,
            shots_sd: 3.0,
            on_target_ratio: UniformRange::new(0.3, 0.6),
            goals_per_shot_on_target: 0.3,
            goals_sd: 1.0,
            corners: NormalParams::new(6.0, 2.0),
            fouls: NormalParams::new(10.0, 3.0),
            yellows_per_foul: 0.3,
            red_card_chance: 0.05,
            pass_completion: UniformRange::new(0.75, 0.9),
        }
    }

    pub fn away() -> Self {
        Self {
            shots_at_even_possession: 10.0,
            shots_sd: 3.0,
            on_target_ratio: UniformRange::new(0.25, 0.55),
            goals_per_shot_on_target: 0.25,
            goals_sd: 1.0,
            corners: NormalParams::new(5.0, 2.0),
            fouls: NormalParams::new(11.0, 3.0),
            yellows_per_foul: 0.35,
            red_card_chance: 0.06,
            pass_completion: UniformRange::new(0.7, 0.85),
        }
    }

    /// First problem found, if any.
    pub fn problem(&self) -> Option<String> {
        let finite_non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !finite_non_negative(self.shots_at_even_possession) || !finite_non_negative(self.shots_sd) {
            return Some("shot parameters must be finite and non-negative".to_string());
        }
        if !self.on_target_ratio.is_ratio() {
            return Some("on_target_ratio must be a non-empty range inside [0, 1]".to_string());
        }
        if !finite_non_negative(self.goals_per_shot_on_target) || !finite_non_negative(self.goals_sd) {
            return Some("goal parameters must be finite and non-negative".to_string());
        }
        if !self.corners.is_valid() || !self.fouls.is_valid() {
            return Some("corner and foul distributions need a finite mean and sd >= 0".to_string());
        }
        if !finite_non_negative(self.yellows_per_foul) {
            return Some("yellows_per_foul must be finite and non-negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.red_card_chance) {
            return Some(format!("red_card_chance {} outside [0, 1]", self.red_card_chance));
        }
        if !self.pass_completion.is_ratio() {
            return Some("pass_completion must be a non-empty range inside [0, 1]".to_string());
        }
        None
    }
}
