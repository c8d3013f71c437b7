use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::core::{
    config::ConfigManager,
    coordinator::PlayerWarnings,
    replay_engine::{self, ReplayError, Scenario},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("usage: player-warnings <scenario.json> [config-dir]")]
    Usage,

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init in the same process keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Replay a recorded scenario and print every warning it produces.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<(), AppError> {
    let mut args = args.into_iter();
    let scenario_path = args.next().map(PathBuf::from).ok_or(AppError::Usage)?;
    let config_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    init_logging();

    let settings = ConfigManager::new(config_dir).load();
    let scenario = Scenario::load(&scenario_path)?;
    log::info!(
        "Replaying {} ticks from {:?}",
        scenario.ticks.len(),
        scenario_path
    );

    let mut plugin = PlayerWarnings::new(settings.player_warnings);
    for line in replay_engine::replay(&mut plugin, &scenario) {
        println!("[tick {}] {}", line.tick, line.message);
    }

    log::info!("Replay finished: {:?}", plugin.state());
    Ok(())
}
