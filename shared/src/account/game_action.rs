use tufia_serde::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

use crate::{ActionId, Coordinate, TileEntity, EMPTY_ACTION_ID};

/// Kind of event recorded in a floor's action log
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActionType {
    #[default]
    Move,
    Fight,
    OpenChest,
    Reset,
    PlayerDied,
    /// A byte outside `0..=4`. Holding a known byte here does not survive a
    /// round trip: it decodes back as the named variant.
    Unknown(u8),
}

impl ActionType {
    pub fn to_byte(self) -> u8 {
        match self {
            ActionType::Move => 0,
            ActionType::Fight => 1,
            ActionType::OpenChest => 2,
            ActionType::Reset => 3,
            ActionType::PlayerDied => 4,
            ActionType::Unknown(byte) => byte,
        }
    }
}

impl From<u8> for ActionType {
    fn from(byte: u8) -> Self {
        match byte {
            0 => ActionType::Move,
            1 => ActionType::Fight,
            2 => ActionType::OpenChest,
            3 => ActionType::Reset,
            4 => ActionType::PlayerDied,
            other => ActionType::Unknown(other),
        }
    }
}

/// One slot of the action ring buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameAction {
    pub action_id: ActionId,
    pub action_type: ActionType,
    pub from_x: u8,
    pub from_y: u8,
    pub to_x: u8,
    pub to_y: u8,
    /// Resulting occupant of the target cell
    pub tile: TileEntity,
    /// Magnitude of the action, e.g. damage dealt
    pub amount: u64,
}

impl GameAction {
    /// Slot that has never held an action
    pub fn is_empty_slot(&self) -> bool {
        self.action_id == EMPTY_ACTION_ID
    }

    pub fn source(&self) -> Coordinate {
        Coordinate::new(self.from_x, self.from_y)
    }

    pub fn target(&self) -> Coordinate {
        Coordinate::new(self.to_x, self.to_y)
    }
}

impl Serde for GameAction {
    fn ser(&self, writer: &mut ByteWriter) {
        self.action_id.ser(writer);
        self.action_type.to_byte().ser(writer);
        self.from_x.ser(writer);
        self.from_y.ser(writer);
        self.to_x.ser(writer);
        self.to_y.ser(writer);
        self.tile.ser(writer);
        self.amount.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            action_id: u64::de(reader)?,
            action_type: ActionType::from(u8::de(reader)?),
            from_x: u8::de(reader)?,
            from_y: u8::de(reader)?,
            to_x: u8::de(reader)?,
            to_y: u8::de(reader)?,
            tile: TileEntity::de(reader)?,
            amount: u64::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for GameAction {
    fn const_byte_length() -> usize {
        8 + 1 + 4 + TileEntity::const_byte_length() + 8
    }
}
