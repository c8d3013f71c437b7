#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// The ultimate strictness: catches things like missing documentation or overflow risks
#![warn(clippy::restriction)]
pub mod core;

pub mod app;
pub use app::run;
pub use crate::core::coordinator::{on_config_changed, on_tick, PlayerWarnings, TickOutcome, TickSnapshot};
pub use crate::core::host::HostClient;
