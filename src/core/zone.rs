// Zone classification and the opponent level window.

use serde::{Deserialize, Serialize};

use super::model::{WorldFlags, ZoneClass};
use super::varbits::VarbitState;

/// Level range added on every hostile world type
pub const HOSTILE_LEVEL_RANGE: i32 = 15;

/// Result of classifying the current world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub hostile: bool,
    pub zone_class: ZoneClass,
}

/// Classify the world from its flags. The first hostile tag in iteration
/// order wins.
pub fn classify(flags: &WorldFlags) -> Classification {
    flags
        .iter()
        .find_map(|flag| flag.hostile_class())
        .map(|zone_class| Classification {
            hostile: true,
            zone_class,
        })
        .unwrap_or_default()
}

/// Inclusive combat level range of opponents worth warning about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelWindow {
    pub min: i32,
    pub max: i32,
}

impl LevelWindow {
    /// Build the window around `combat_level`. `wilderness_depth` is only
    /// added while the wilderness varbit is set.
    pub fn compute(
        zone_class: ZoneClass,
        combat_level: i32,
        varbits: &VarbitState,
        wilderness_depth: i32,
    ) -> Self {
        let mut difference: i32 = 0;

        if zone_class.is_hostile() {
            difference = difference.saturating_add(HOSTILE_LEVEL_RANGE);
        }

        // Depth comes from widget text and may be any i32
        if varbits.in_wilderness() {
            difference = difference.saturating_add(wilderness_depth);
        }

        // No clamping: a negative minimum admits every low level
        Self {
            min: combat_level.saturating_sub(difference),
            max: combat_level.saturating_add(difference),
        }
    }

    pub fn contains(&self, combat_level: i32) -> bool {
        combat_level >= self.min && combat_level <= self.max
    }
}
