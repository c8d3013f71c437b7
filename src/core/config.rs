use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Config group the plugin's keys live under
pub const CONFIG_GROUP: &str = "playerWarnings";

/// User-facing switches for the warning engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Warn about players while in pvp situations
    #[serde(default = "default_pvp_warnings", alias = "InPvp")]
    pub pvp_warnings_enabled: bool,
    /// Only warn about players that could attack you
    #[serde(default, alias = "onlyAttackers")]
    pub attackers_only_mode: bool,
}

fn default_pvp_warnings() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pvp_warnings_enabled: true,
            attackers_only_mode: false,
        }
    }
}

/// Settings file contents, keyed by config group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, rename = "playerWarnings")]
    pub player_warnings: EngineConfig,
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            match fs::read_to_string(&self.config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Invalid settings in {:?}: {}", self.config_path, e),
                },
                Err(e) => log::warn!("Could not read {:?}: {}", self.config_path, e),
            }
        }
        Settings::default()
    }
}
