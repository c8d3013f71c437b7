// Per-entity filter evaluation.
//
// Decides whether a nearby player is worth a warning under the current
// filter mode and returns the notification to send.

use super::model::Notification;
use crate::core::model::ZoneClass;
use crate::core::zone::LevelWindow;

/// Context shared by every entity evaluated in a tick
pub struct TriggerContext {
    pub attackers_only: bool,
    pub zone_class: ZoneClass,
    pub window: LevelWindow,
}

/// Evaluate one nearby player.
/// Returns Some(notification) if the player should be warned about.
pub fn evaluate_entity(ctx: &TriggerContext, name: &str, combat_level: i32) -> Option<Notification> {
    if !ctx.attackers_only {
        return Some(Notification::leveled(name, combat_level));
    }

    // Anyone can attack on deadman worlds
    if ctx.zone_class == ZoneClass::Deadman {
        return Some(Notification::presence(name));
    }

    // Level range only; this does not check whether the player is attacking
    ctx.window
        .contains(combat_level)
        .then(|| Notification::leveled(name, combat_level))
}
