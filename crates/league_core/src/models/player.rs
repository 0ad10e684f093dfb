use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Baseline rating range a new player is drawn from.
pub const RATING_RANGE: (f64, f64) = (60.0, 90.0);
/// Form multiplier range a new player is drawn from.
pub const FORM_RANGE: (f64, f64) = (0.8, 1.2);

/// A rostered player and everything they accumulate over a season.
///
/// `rating` and `form` are drawn once at creation and never change; every
/// counter below them only grows while matches are simulated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    /// Name of the owning team.
    pub team: String,
    pub position: Position,
    pub rating: f64,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    pub form: f64,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub passes: u32,
    #[serde(default)]
    pub passes_completed: u32,
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub tackles_won: u32,
    #[serde(default)]
    pub minutes_played: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_outfield(&self) -> bool {
        !self.is_goalkeeper()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "DEF" => Ok(Position::DEF),
            "MID" => Ok(Position::MID),
            "FWD" => Ok(Position::FWD),
            other => Err(format!("Unknown position: {}", other)),
        }
    }
}

impl Player {
    /// Player with explicit rating and form and all counters at zero.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        rating: f64,
        form: f64,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position,
            rating,
            goals: 0,
            assists: 0,
            clean_sheets: 0,
            form,
            yellow_cards: 0,
            red_cards: 0,
            shots: 0,
            shots_on_target: 0,
            passes: 0,
            passes_completed: 0,
            tackles: 0,
            tackles_won: 0,
            minutes_played: 0,
        }
    }

    /// Fresh player with rating and form drawn from [`RATING_RANGE`] and
    /// [`FORM_RANGE`].
    pub fn generate<R: Rng + ?Sized>(
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        rng: &mut R,
    ) -> Self {
        let rating = rng.gen_range(RATING_RANGE.0..RATING_RANGE.1);
        let form = rng.gen_range(FORM_RANGE.0..FORM_RANGE.1);
        Self::new(name, team, position, rating, form)
    }

    /// Rating scaled by form; the team rating averages this value.
    pub fn effective_rating(&self) -> f64 {
        self.rating * self.form
    }

    pub fn pass_accuracy(&self) -> f64 {
        percentage(self.passes_completed, self.passes)
    }

    pub fn shot_accuracy(&self) -> f64 {
        percentage(self.shots_on_target, self.shots)
    }

    pub fn tackle_success(&self) -> f64 {
        percentage(self.tackles_won, self.tackles)
    }

    /// Yellow cards count once, red cards twice.
    pub fn disciplinary_points(&self) -> u32 {
        self.yellow_cards + 2 * self.red_cards
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
