use tufia_serde::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

use crate::{
    Coordinate, FloorId, GameAction, Identity, TileEntity, TileType, ACTION_LOG_CAPACITY,
    BOARD_HEIGHT, BOARD_WIDTH,
};

use super::discriminator::{Account, AccountKind};

pub type TileGrid = [[TileEntity; BOARD_HEIGHT]; BOARD_WIDTH];
pub type ActionRing = [GameAction; ACTION_LOG_CAPACITY];

/// Authoritative state of one floor, published as the `GameData` account
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub id_counter: u64,
    pub action_index: u64,
    /// Indexed `tiles[x][y]`
    pub tiles: TileGrid,
    pub total_wood_collected: u64,
    /// Ring buffer of recent actions, in slot order
    pub actions: ActionRing,
    pub floor_id: FloorId,
    pub owner: Identity,
}

impl BoardSnapshot {
    pub fn tile(&self, coordinate: Coordinate) -> Option<&TileEntity> {
        if !coordinate.in_bounds() {
            return None;
        }
        Some(&self.tiles[usize::from(coordinate.x)][usize::from(coordinate.y)])
    }

    /// Mutable access for builders and tests
    pub fn tile_mut(&mut self, coordinate: Coordinate) -> Option<&mut TileEntity> {
        if !coordinate.in_bounds() {
            return None;
        }
        Some(&mut self.tiles[usize::from(coordinate.x)][usize::from(coordinate.y)])
    }

    /// All cells with their coordinates, `x` outer
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coordinate, &TileEntity)> {
        self.tiles.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, tile)| (Coordinate::new(x as u8, y as u8), tile))
        })
    }

    pub fn count_tiles(&self, tile_type: TileType) -> usize {
        self.iter_tiles()
            .filter(|(_, tile)| tile.tile_type == tile_type)
            .count()
    }

    /// Slots that currently hold an action
    pub fn recorded_actions(&self) -> impl Iterator<Item = &GameAction> {
        self.actions.iter().filter(|action| !action.is_empty_slot())
    }
}

impl Serde for BoardSnapshot {
    fn ser(&self, writer: &mut ByteWriter) {
        self.id_counter.ser(writer);
        self.action_index.ser(writer);
        self.tiles.ser(writer);
        self.total_wood_collected.ser(writer);
        self.actions.ser(writer);
        self.floor_id.ser(writer);
        self.owner.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id_counter: u64::de(reader)?,
            action_index: u64::de(reader)?,
            tiles: <TileGrid as Serde>::de(reader)?,
            total_wood_collected: u64::de(reader)?,
            actions: <ActionRing as Serde>::de(reader)?,
            floor_id: u32::de(reader)?,
            owner: Identity::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for BoardSnapshot {
    fn const_byte_length() -> usize {
        8 + 8
            + <TileGrid as ConstByteLength>::const_byte_length()
            + 8
            + <ActionRing as ConstByteLength>::const_byte_length()
            + 4
            + Identity::const_byte_length()
    }
}

impl Account for BoardSnapshot {
    const KIND: AccountKind = AccountKind::GameData;
}
