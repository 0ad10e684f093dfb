use super::player::percentage;
use serde::{Deserialize, Serialize};

/// One side's statistics for a single match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchStats {
    /// Share of the ball in percent; the two sides of a match sum to 100.
    pub possession: f64,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub corners: u32,
    #[serde(default)]
    pub fouls: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub offsides: u32,
    #[serde(default)]
    pub passes: u32,
    #[serde(default)]
    pub passes_completed: u32,
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub tackles_won: u32,
}

impl Default for MatchStats {
    fn default() -> Self {
        Self {
            possession: 50.0,
            shots: 0,
            shots_on_target: 0,
            corners: 0,
            fouls: 0,
            yellow_cards: 0,
            red_cards: 0,
            offsides: 0,
            passes: 0,
            passes_completed: 0,
            tackles: 0,
            tackles_won: 0,
        }
    }
}

impl MatchStats {
    pub fn pass_accuracy(&self) -> f64 {
        percentage(self.passes_completed, self.passes)
    }
}
