//! Replays recorded ticks through the plugin without a live client.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::EngineConfig;
use super::coordinator::{PlayerWarnings, TickSnapshot};
use super::host::HostClient;
use super::model::{Entity, WorldFlags};
use super::varbits::Varbit;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Format(#[from] serde_json::Error),
}

/// One recorded world tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordedTick {
    /// Applied before the tick runs
    #[serde(default)]
    pub config_change: Option<EngineConfig>,
    /// None while logged out
    #[serde(default)]
    pub snapshot: Option<TickSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Overrides the loaded settings when present
    #[serde(default)]
    pub config: Option<EngineConfig>,
    pub ticks: Vec<RecordedTick>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Warning delivered during a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLine {
    pub tick: usize,
    pub message: String,
}

/// Host backed by a single recorded tick.
pub struct ReplayHost<'a> {
    tick: &'a RecordedTick,
    sent: Vec<String>,
}

impl<'a> ReplayHost<'a> {
    pub fn new(tick: &'a RecordedTick) -> Self {
        Self {
            tick,
            sent: Vec::new(),
        }
    }

    pub fn into_sent(self) -> Vec<String> {
        self.sent
    }
}

impl HostClient for ReplayHost<'_> {
    fn world_flags(&self) -> WorldFlags {
        self.tick
            .snapshot
            .as_ref()
            .map(|s| s.world_flags.clone())
            .unwrap_or_default()
    }

    fn varbit(&self, id: u32) -> i32 {
        let Some(snapshot) = self.tick.snapshot.as_ref() else {
            return 0;
        };
        Varbit::all()
            .iter()
            .find(|varbit| varbit.host_id() == id)
            // The spec orb conversion is its own inverse
            .map_or(0, |varbit| varbit.from_host(snapshot.varbits.get(*varbit)))
    }

    fn local_actor(&self) -> Option<Entity> {
        self.tick.snapshot.as_ref().map(|s| s.local_actor.clone())
    }

    fn visible_entities(&self) -> Vec<Entity> {
        self.tick
            .snapshot
            .as_ref()
            .map(|s| s.entities.clone())
            .unwrap_or_default()
    }

    fn wilderness_depth_label(&self) -> Option<String> {
        self.tick
            .snapshot
            .as_ref()
            .and_then(|s| s.wilderness_depth_label.clone())
    }

    fn notify(&mut self, message: &str) {
        self.sent.push(message.to_string());
    }

    fn snapshot(&self) -> Option<TickSnapshot> {
        self.tick.snapshot.clone()
    }
}

/// Run every tick of a scenario through the plugin, in order.
pub fn replay(plugin: &mut PlayerWarnings, scenario: &Scenario) -> Vec<ReplayLine> {
    let mut lines = Vec::new();

    if let Some(config) = scenario.config {
        plugin.on_config_changed(config);
    }

    for (index, tick) in scenario.ticks.iter().enumerate() {
        if let Some(config) = tick.config_change {
            plugin.on_config_changed(config);
        }

        let mut host = ReplayHost::new(tick);
        plugin.on_game_tick(&mut host);

        lines.extend(host.into_sent().into_iter().map(|message| ReplayLine {
            tick: index + 1,
            message,
        }));
    }

    lines
}
