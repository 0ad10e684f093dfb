//! Optional YAML configuration for `league-sim`.
//!
//! ```yaml
//! league_name: Sunday League
//! save_dir: saves
//! seed: 42
//! engine:
//!   assist_chance: 0.7
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use anyhow::{Context, Result};
use league_core::save::DEFAULT_SAVE_DIR;
use league_core::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LEAGUE_NAME: &str = "Simulation League";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    pub league_name: String,
    pub save_dir: PathBuf,
    pub seed: Option<u64>,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            league_name: DEFAULT_LEAGUE_NAME.to_string(),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            seed: None,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: CliConfig = serde_yaml::from_str(text)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// File config (or defaults) with command-line overrides applied.
    pub fn resolve(path: Option<&Path>, seed: Option<u64>, save_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if seed.is_some() {
            config.seed = seed;
        }
        if let Some(dir) = save_dir {
            config.save_dir = dir;
        }
        Ok(config)
    }
}
