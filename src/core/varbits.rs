use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Varbits the engine reads each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varbit {
    /// Non-zero while the local actor stands in a pvp safe zone
    SafeZone,
    /// Non-zero while wilderness level scaling applies
    InWilderness,
}

impl Varbit {
    /// Host varbit id: the pvp spec orb and the wilderness flag
    pub const fn host_id(self) -> u32 {
        match self {
            Self::SafeZone => 8121,
            Self::InWilderness => 5963,
        }
    }

    /// Convert the raw host value into the engine's convention.
    ///
    /// The spec orb reads 0 inside a safe zone, so it is inverted here.
    pub const fn from_host(self, raw: i32) -> i32 {
        match self {
            Self::SafeZone => (raw == 0) as i32,
            Self::InWilderness => raw,
        }
    }

    pub fn all() -> &'static [Varbit] {
        &[Self::SafeZone, Self::InWilderness]
    }
}

/// Snapshot of the varbits read for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarbitState {
    values: BTreeMap<Varbit, i32>,
}

impl VarbitState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, varbit: Varbit, value: i32) -> Self {
        self.set(varbit, value);
        self
    }

    pub fn set(&mut self, varbit: Varbit, value: i32) {
        self.values.insert(varbit, value);
    }

    /// Missing varbits read as 0, like an unset host varbit
    pub fn get(&self, varbit: Varbit) -> i32 {
        self.values.get(&varbit).copied().unwrap_or(0)
    }

    pub fn in_safe_zone(&self) -> bool {
        self.get(Varbit::SafeZone) != 0
    }

    pub fn in_wilderness(&self) -> bool {
        self.get(Varbit::InWilderness) != 0
    }
}
