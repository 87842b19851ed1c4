use tufia_serde::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

use crate::Identity;

/// What occupies a board cell.
///
/// Bytes outside the known range are kept as `Unknown` so that a record
/// re-encodes to exactly the bytes it was decoded from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileType {
    #[default]
    Empty,
    Player,
    Enemy,
    GoldChest,
    BlueChest,
    Stairs,
    /// A byte outside `0..=5`. Holding a known byte here does not survive a
    /// round trip: it decodes back as the named variant.
    Unknown(u8),
}

impl TileType {
    pub fn to_byte(self) -> u8 {
        match self {
            TileType::Empty => 0,
            TileType::Player => 1,
            TileType::Enemy => 2,
            TileType::GoldChest => 3,
            TileType::BlueChest => 4,
            TileType::Stairs => 5,
            TileType::Unknown(byte) => byte,
        }
    }

    pub fn is_chest(self) -> bool {
        matches!(self, TileType::GoldChest | TileType::BlueChest)
    }
}

impl From<u8> for TileType {
    fn from(byte: u8) -> Self {
        match byte {
            0 => TileType::Empty,
            1 => TileType::Player,
            2 => TileType::Enemy,
            3 => TileType::GoldChest,
            4 => TileType::BlueChest,
            5 => TileType::Stairs,
            other => TileType::Unknown(other),
        }
    }
}

/// Occupant of one board cell, as published on-chain.
///
/// `armor <= max_armor` and `health <= max_health` usually hold but are
/// not enforced; the ledger may publish transient violations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileEntity {
    pub tile_type: TileType,
    pub level: u32,
    pub owner: Identity,
    pub xp: u32,
    pub damage: u32,
    pub defence: u32,
    pub armor: u32,
    pub max_armor: u32,
    pub health: u32,
    pub max_health: u32,
}

impl TileEntity {
    /// Placeholder occupant for a cell that holds nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_type == TileType::Empty
    }

    /// A player tile belonging to `identity`
    pub fn is_player_owned_by(&self, identity: &Identity) -> bool {
        self.tile_type == TileType::Player && self.owner == *identity
    }
}

impl Serde for TileEntity {
    fn ser(&self, writer: &mut ByteWriter) {
        self.tile_type.to_byte().ser(writer);
        self.level.ser(writer);
        self.owner.ser(writer);
        self.xp.ser(writer);
        self.damage.ser(writer);
        self.defence.ser(writer);
        self.armor.ser(writer);
        self.max_armor.ser(writer);
        self.health.ser(writer);
        self.max_health.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            tile_type: TileType::from(u8::de(reader)?),
            level: u32::de(reader)?,
            owner: Identity::de(reader)?,
            xp: u32::de(reader)?,
            damage: u32::de(reader)?,
            defence: u32::de(reader)?,
            armor: u32::de(reader)?,
            max_armor: u32::de(reader)?,
            health: u32::de(reader)?,
            max_health: u32::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for TileEntity {
    fn const_byte_length() -> usize {
        // type, level, owner, then seven u32 stats
        1 + 4 + Identity::const_byte_length() + 7 * 4
    }
}
