use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::weather::Units;

pub const DEFAULT_CITY: &str = "Patna";

/// User preferences persisted across sessions. Every field defaults
/// independently, so a file missing a key still loads the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub units: Units,
    pub selected_city: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            units: Units::Metric,
            selected_city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Load preferences from disk, falling back to defaults for a missing or
/// unreadable file. Returns the resolved path so callers can persist later.
pub fn load_preferences(enable_disk: bool) -> (Preferences, Option<PathBuf>) {
    if !enable_disk {
        return (Preferences::default(), None);
    }
    let Some(path) = preferences_path() else {
        return (Preferences::default(), None);
    };
    let prefs = read_preferences(&path);
    (prefs, Some(path))
}

pub fn read_preferences(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable preferences file");
            Preferences::default()
        }),
        Err(_) => Preferences::default(),
    }
}

pub fn save_preferences(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating preferences directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(prefs).context("serializing preferences failed")?;
    fs::write(path, payload).context("writing preferences file failed")
}

fn preferences_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SKYCAST_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("preferences.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("skycast")
            .join("preferences.json"),
    )
}
