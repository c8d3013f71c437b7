pub mod alerts;
pub mod config;
pub mod coordinator;
pub mod host;
pub mod model;
pub mod parser;
pub mod replay_engine;
pub mod state;
pub mod varbits;
pub mod zone;

#[cfg(test)]
mod sim_test;
