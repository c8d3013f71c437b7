// Notification types produced by the threat scanner.

use serde::{Deserialize, Serialize};

use crate::core::model::EntityName;

/// Most warnings sent during one hostile episode
pub const MAX_WARNINGS: u32 = 5;

/// What a notification tells the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Someone is nearby; level irrelevant (deadman worlds)
    Presence,
    /// Someone is nearby, with their combat level
    Leveled,
}

/// Warning about one nearby player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub name: EntityName,
    pub combat_level: Option<i32>,
    pub message: String,
}

impl Notification {
    pub fn presence(name: &str) -> Self {
        Self {
            kind: NotificationKind::Presence,
            name: name.to_string(),
            combat_level: None,
            message: format!("{} is nearby!", name),
        }
    }

    pub fn leveled(name: &str, combat_level: i32) -> Self {
        Self {
            kind: NotificationKind::Leveled,
            name: name.to_string(),
            combat_level: Some(combat_level),
            message: format!("{} combat level {} is nearby!", name, combat_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let n = Notification::leveled("Zezima", 126);
        assert_eq!(n.message, "Zezima combat level 126 is nearby!");
        assert_eq!(n.combat_level, Some(126));

        let n = Notification::presence("Zezima");
        assert_eq!(n.message, "Zezima is nearby!");
        assert_eq!(n.kind, NotificationKind::Presence);
        assert_eq!(n.combat_level, None);
    }
}
