use super::error::SaveError;
use super::format::{from_json, to_json};
use crate::models::League;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_SAVE_DIR: &str = "saves";

const SAVE_PREFIX: &str = "league_save_";
const SAVE_SUFFIX: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Save files in one directory, named `league_save_<YYYYmmdd_HHMMSS>.json`.
/// A second save within the same second gets a `_1`, `_2`, ... suffix.
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_dir: PathBuf,
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIR)
    }
}

impl SaveManager {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self { save_dir: save_dir.into() }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Write a new save file and return its path.
    pub fn save(&self, league: &League) -> Result<PathBuf, SaveError> {
        fs::create_dir_all(&self.save_dir)?;

        let json = to_json(league)?;
        let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let path = self.unused_path(&stamp);
        write_atomic(&path, json.as_bytes())?;

        log::info!(
            "Saved league '{}' at matchday {} to {}",
            league.name,
            league.current_matchday,
            path.display()
        );
        Ok(path)
    }

    /// Load a league from `path`. Nothing is returned unless the whole
    /// document resolves.
    pub fn load(path: &Path) -> Result<League, SaveError> {
        if !path.is_file() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }
        let json = fs::read_to_string(path)?;
        let league = from_json(&json)?;
        log::info!(
            "Loaded league '{}' at matchday {} from {}",
            league.name,
            league.current_matchday,
            path.display()
        );
        Ok(league)
    }

    /// Save files, oldest first. A missing directory has no saves.
    pub fn list_saves(&self) -> Result<Vec<PathBuf>, SaveError> {
        if !self.save_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut saves = Vec::new();
        for entry in fs::read_dir(&self.save_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", self.save_dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !(name.starts_with(SAVE_PREFIX) && name.ends_with(SAVE_SUFFIX)) {
                continue;
            }
            if save_key(name).is_none() {
                log::warn!("Ignoring {}: no save timestamp in the name", path.display());
                continue;
            }
            if !path.is_file() {
                log::warn!("Ignoring {}: not a regular file", path.display());
                continue;
            }
            saves.push(path);
        }

        saves.sort_by_cached_key(|p| p.file_name().and_then(|n| n.to_str()).and_then(save_key));
        Ok(saves)
    }

    pub fn latest_save(&self) -> Result<Option<PathBuf>, SaveError> {
        Ok(self.list_saves()?.pop())
    }

    pub fn load_latest(&self) -> Result<Option<League>, SaveError> {
        match self.latest_save()? {
            Some(path) => Self::load(&path).map(Some),
            None => Ok(None),
        }
    }

    fn unused_path(&self, stamp: &str) -> PathBuf {
        let mut path = self.save_dir.join(format!("{}{}{}", SAVE_PREFIX, stamp, SAVE_SUFFIX));
        let mut n = 1;
        while path.exists() {
            path = self.save_dir.join(format!("{}{}_{}{}", SAVE_PREFIX, stamp, n, SAVE_SUFFIX));
            n += 1;
        }
        path
    }
}

/// Ordering key of a save file name: its timestamp, then the collision
/// counter. `None` for names that are not save files, including
/// `league_save_*.json` names whose stamp is not a timestamp.
fn save_key(file_name: &str) -> Option<(String, u32)> {
    let stem = file_name.strip_prefix(SAVE_PREFIX)?.strip_suffix(SAVE_SUFFIX)?;
    if let Some((stamp, counter)) = stem.rsplit_once('_') {
        if is_timestamp(stamp) {
            return counter.parse().ok().map(|n| (stamp.to_string(), n));
        }
    }
    is_timestamp(stem).then(|| (stem.to_string(), 0))
}

fn is_timestamp(stamp: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok()
}

/// Write to a sibling temp file, then rename over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), SaveError> {
    let temp_path = path.with_extension("json.tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;
    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
