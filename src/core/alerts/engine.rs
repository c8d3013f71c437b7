// Threat scanner - walks nearby players and throttles warnings per episode.

use super::model::{Notification, MAX_WARNINGS};
use super::triggers::{evaluate_entity, TriggerContext};
use crate::core::model::{Entity, ZoneClass};
use crate::core::state::EngineState;
use crate::core::varbits::VarbitState;
use crate::core::zone::LevelWindow;

/// Everything the scanner reads for one hostile tick
pub struct ScanInput<'a> {
    pub local_actor: &'a Entity,
    /// Visible players in host order, local actor included
    pub entities: &'a [Entity],
    pub varbits: &'a VarbitState,
    pub wilderness_depth: i32,
    pub zone_class: ZoneClass,
    pub attackers_only: bool,
}

/// Scan nearby players for a hostile tick.
/// Returns the warnings to deliver, at most what is left of the episode cap.
pub fn scan(state: &mut EngineState, input: &ScanInput) -> Vec<Notification> {
    let mut notifications = Vec::new();

    // Safe zones override everything
    if input.varbits.in_safe_zone() {
        log::trace!("In a safe zone, resetting warnings");
        state.reset_warnings();
        return notifications;
    }

    // Only ourselves on screen
    if input.entities.len() == 1 {
        state.reset_warnings();
    }

    state.attackers_only = input.attackers_only;

    let ctx = TriggerContext {
        attackers_only: input.attackers_only,
        zone_class: input.zone_class,
        window: LevelWindow::compute(
            input.zone_class,
            input.local_actor.combat_level,
            input.varbits,
            input.wilderness_depth,
        ),
    };

    for entity in input.entities {
        // Episode cap
        if state.warning_count >= MAX_WARNINGS {
            log::debug!("Warning cap reached, skipping remaining players");
            break;
        }
        if entity.id == input.local_actor.id {
            continue;
        }

        debug_assert!(entity.name.is_some(), "visible player {:?} has no name", entity.id);
        let Some(name) = entity.name.as_deref() else {
            log::warn!("Skipping visible player {:?} without a name", entity.id);
            continue;
        };

        if let Some(notification) = evaluate_entity(&ctx, name, entity.combat_level) {
            state.warning_count += 1;
            notifications.push(notification);
        }
    }

    notifications
}
