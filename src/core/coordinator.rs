use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::alerts::engine::{scan, ScanInput};
use super::alerts::model::Notification;
use super::config::{EngineConfig, CONFIG_GROUP};
use super::host::HostClient;
use super::model::{Entity, WorldFlags};
use super::parser::DepthLabelParser;
use super::state::EngineState;
use super::varbits::VarbitState;
use super::zone::classify;

lazy_static! {
    static ref DEPTH_PARSER: DepthLabelParser = DepthLabelParser::new();
}

/// Host state read at the start of a tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickSnapshot {
    #[serde(default)]
    pub world_flags: WorldFlags,
    #[serde(default)]
    pub varbits: VarbitState,
    pub local_actor: Entity,
    /// Visible players in host order, local actor included
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub wilderness_depth_label: Option<String>,
}

pub struct TickOutcome {
    pub state: EngineState,
    pub notifications: Vec<Notification>,
}

/// Run one world tick.
pub fn on_tick(snapshot: &TickSnapshot, config: &EngineConfig, state: EngineState) -> TickOutcome {
    let mut state = state;

    if !config.pvp_warnings_enabled {
        state.reset_warnings();
        return TickOutcome {
            state,
            notifications: Vec::new(),
        };
    }

    // 1. Classify the world
    let classification = classify(&snapshot.world_flags);
    if classification.hostile != state.in_hostile_zone {
        log::info!(
            "Hostile zone {} ({:?})",
            if classification.hostile { "entered" } else { "left" },
            classification.zone_class
        );
    }
    state.in_hostile_zone = classification.hostile;
    state.current_zone_class = classification.zone_class;

    // 2. The wilderness counts as hostile on any world
    let in_wilderness = snapshot.varbits.in_wilderness();
    if !state.in_hostile_zone && !in_wilderness {
        state.reset_warnings();
        return TickOutcome {
            state,
            notifications: Vec::new(),
        };
    }

    // 3. Scan
    let wilderness_depth = if in_wilderness {
        DEPTH_PARSER.depth_or_zero(snapshot.wilderness_depth_label.as_deref())
    } else {
        0
    };

    let zone_class = state.current_zone_class;
    let notifications = scan(
        &mut state,
        &ScanInput {
            local_actor: &snapshot.local_actor,
            entities: &snapshot.entities,
            varbits: &snapshot.varbits,
            wilderness_depth,
            zone_class,
            attackers_only: config.attackers_only_mode,
        },
    );

    log::trace!(
        "Tick: {} warnings, {} this episode",
        notifications.len(),
        state.warning_count
    );

    TickOutcome {
        state,
        notifications,
    }
}

/// React to a configuration change.
pub fn on_config_changed(config: &EngineConfig, state: EngineState) -> EngineState {
    state.on_config_changed(config)
}

/// Player warnings plugin: owns the engine state and wires it to a host.
pub struct PlayerWarnings {
    config: EngineConfig,
    state: EngineState,
}

impl PlayerWarnings {
    pub const NAME: &'static str = "Player Warnings";
    pub const DESCRIPTION: &'static str =
        "Sends a warning if players appear on your screen in pvp situations";
    pub const TAGS: &'static [&'static str] = &["pvp", "notifications", "warnings", "hcim", "uim"];
    pub const CONFIG_GROUP: &'static str = CONFIG_GROUP;

    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn on_config_changed(&mut self, config: EngineConfig) {
        log::debug!("Config changed: {:?}", config);
        self.config = config;
        self.state = on_config_changed(&self.config, self.state);
    }

    /// Run a tick against the host and deliver its warnings.
    /// Returns the delivered notifications.
    pub fn on_game_tick<H: HostClient>(&mut self, host: &mut H) -> Vec<Notification> {
        let Some(snapshot) = host.snapshot() else {
            log::trace!("No local player, skipping tick");
            return Vec::new();
        };

        let outcome = on_tick(&snapshot, &self.config, self.state);
        self.state = outcome.state;

        for notification in &outcome.notifications {
            host.notify(&notification.message);
        }

        outcome.notifications
    }
}

impl Default for PlayerWarnings {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
