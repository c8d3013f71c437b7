use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::model::ZoneClass;

/// State carried between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineState {
    pub in_hostile_zone: bool,
    pub current_zone_class: ZoneClass,
    /// Warnings sent during the current hostile episode
    pub warning_count: u32,
    /// Filter mode applied by the last scan. Informational only: no decision
    /// reads it back, scans use the config directly.
    pub attackers_only: bool,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_warnings(&mut self) {
        self.warning_count = 0;
    }

    /// Clear flags for features the user just turned off. Never sets a flag:
    /// the next tick re-derives them.
    pub fn on_config_changed(mut self, config: &EngineConfig) -> Self {
        if !config.pvp_warnings_enabled {
            self.in_hostile_zone = false;
        }

        if !config.attackers_only_mode {
            self.attackers_only = false;
        }

        self
    }
}
