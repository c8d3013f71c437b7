// Warning pipeline for nearby players.
//
// Architecture:
// - model.rs: Notification types and the episode cap
// - triggers.rs: Per-player filter evaluation
// - engine.rs: Scans visible players and throttles warnings

pub mod engine;
pub mod model;
pub mod triggers;
