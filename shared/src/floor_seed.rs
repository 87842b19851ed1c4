use std::fmt;

use crate::FloorNumber;

/// Prefix the ledger program uses when deriving floor account addresses
pub const DEFAULT_FLOOR_SEED_PREFIX: &str = "floorssssssssss";

/// Seed string naming one floor's `GameData` account: the prefix followed
/// by the decimal floor number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FloorSeed {
    prefix: String,
    floor: FloorNumber,
}

impl FloorSeed {
    pub fn new(prefix: impl Into<String>, floor: FloorNumber) -> Self {
        Self {
            prefix: prefix.into(),
            floor,
        }
    }

    pub fn for_floor(floor: FloorNumber) -> Self {
        Self::new(DEFAULT_FLOOR_SEED_PREFIX, floor)
    }

    pub fn floor(&self) -> FloorNumber {
        self.floor
    }

    /// Seed of the floor above this one
    pub fn next(&self) -> Self {
        Self::new(self.prefix.clone(), self.floor.wrapping_add(1))
    }
}

impl fmt::Display for FloorSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.floor)
    }
}
