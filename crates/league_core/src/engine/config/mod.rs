//! # Engine Configuration
//!
//! Every constant of the match outcome model lives here so presets and YAML
//! files can retune the model without touching the pipeline.
//!
//! ```rust
//! use league_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! let goals_fest = EngineConfig::high_scoring();
//! assert!(goals_fest.validate().is_ok());
//! ```

mod side_config;

pub use side_config::{NormalParams, SideConfig, UniformRange};

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};

/// Missing keys in a serialized config take their default value; a `home` or
/// `away` section, when present, must be complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Home possession with equally rated teams.
    pub possession_base: f64,
    /// Rating difference is divided by this before shifting possession.
    pub possession_rating_divisor: f64,
    pub possession_min: f64,
    pub possession_max: f64,
    /// Passes attempted per point of possession.
    pub passes_per_possession_point: f64,
    pub max_yellow_cards: u32,
    /// Chance that a goal comes with an assist.
    pub assist_chance: f64,
    /// Minutes credited to every rostered player per match.
    pub minutes_per_match: u32,
    pub home: SideConfig,
    pub away: SideConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            possession_base: 50.0,
            possession_rating_divisor: 2.0,
            possession_min: 30.0,
            possession_max: 70.0,
            passes_per_possession_point: 5.0,
            max_yellow_cards: 5,
            assist_chance: 0.8,
            minutes_per_match: 90,
            home: SideConfig::home(),
            away: SideConfig::away(),
        }
    }
}

impl EngineConfig {
    /// Calibrated defaults.
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More shots and a higher conversion rate on both sides.
    pub fn high_scoring() -> Self {
        let mut cfg = Self::default();
        cfg.home.shots_at_even_possession = 15.0;
        cfg.away.shots_at_even_possession = 13.0;
        cfg.home.goals_per_shot_on_target = 0.4;
        cfg.away.goals_per_shot_on_target = 0.35;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(LeagueError::InvalidConfig(msg));

        if !self.possession_base.is_finite() {
            return invalid("possession_base must be finite".to_string());
        }
        if !self.possession_rating_divisor.is_finite() || self.possession_rating_divisor <= 0.0 {
            return invalid("possession_rating_divisor must be positive".to_string());
        }
        if !(0.0..=100.0).contains(&self.possession_min)
            || !(0.0..=100.0).contains(&self.possession_max)
            || self.possession_min > self.possession_max
        {
            return invalid(format!(
                "possession bounds [{}, {}] must be ordered inside [0, 100]",
                self.possession_min, self.possession_max
            ));
        }
        if !self.passes_per_possession_point.is_finite() || self.passes_per_possession_point < 0.0 {
            return invalid("passes_per_possession_point must be finite and non-negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.assist_chance) {
            return invalid(format!("assist_chance {} outside [0, 1]", self.assist_chance));
        }
        if let Some(problem) = self.home.problem() {
            return invalid(format!("home: {}", problem));
        }
        if let Some(problem) = self.away.problem() {
            return invalid(format!("away: {}", problem));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_model_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.possession_base, 50.0);
        assert_eq!((cfg.possession_min, cfg.possession_max), (30.0, 70.0));
        assert_eq!(cfg.home.shots_at_even_possession, 12.0);
        assert_eq!(cfg.away.goals_per_shot_on_target, 0.25);
        assert_eq!(cfg.max_yellow_cards, 5);
        assert_eq!(cfg, EngineConfig::realistic());
    }

    #[test]
    fn test_presets_validate() {
        assert!(EngineConfig::realistic().validate().is_ok());
        assert!(EngineConfig::high_scoring().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_possession_bounds() {
        let mut cfg = EngineConfig::default();
        cfg.possession_min = 80.0;
        assert!(matches!(cfg.validate(), Err(LeagueError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_side() {
        let mut cfg = EngineConfig::default();
        cfg.away.shots_sd = -1.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("away"));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"assist_chance": 0.5}"#).unwrap();
        assert_eq!(cfg.assist_chance, 0.5);
        assert_eq!(cfg.home, SideConfig::home());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = EngineConfig::high_scoring();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
