use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type EntityName = String;

/// World type tags reported by the host for the current world.
///
/// Declaration order is the natural iteration order of [`WorldFlags`], which
/// decides the zone class when a world carries more than one hostile tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorldFlag {
    Members,
    Pvp,
    Bounty,
    SkillTotal,
    HighRisk,
    LastManStanding,
    QuestSpeedrunning,
    FreshStartWorld,
    Deadman,
    NosaveMode,
    TournamentWorld,
    Seasonal,
    PvpArena,
    BetaWorld,
}

impl WorldFlag {
    /// Zone class this tag implies, if it marks a hostile world
    pub fn hostile_class(self) -> Option<ZoneClass> {
        match self {
            Self::Deadman => Some(ZoneClass::Deadman),
            Self::Pvp => Some(ZoneClass::Pvp),
            Self::HighRisk => Some(ZoneClass::HighRisk),
            _ => None,
        }
    }
}

pub type WorldFlags = BTreeSet<WorldFlag>;

/// Hostility class of the current zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneClass {
    #[default]
    None,
    Deadman,
    Pvp,
    HighRisk,
}

impl ZoneClass {
    pub fn is_hostile(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Opaque identity of an entity, compared to exclude the local actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// A player visible to the local actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// None when the host has not resolved the name yet
    #[serde(default)]
    pub name: Option<EntityName>,
    pub combat_level: i32,
}

impl Entity {
    pub fn new(id: u64, name: impl Into<EntityName>, combat_level: i32) -> Self {
        Self {
            id: EntityId(id),
            name: Some(name.into()),
            combat_level,
        }
    }
}
