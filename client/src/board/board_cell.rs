use tufia_shared::{Coordinate, TileEntity, TileType};

/// One slot of the local grid together with the tile currently placed on it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardCell {
    coordinate: Coordinate,
    occupant: Option<TileEntity>,
}

impl BoardCell {
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            occupant: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn x(&self) -> u8 {
        self.coordinate.x
    }

    pub fn y(&self) -> u8 {
        self.coordinate.y
    }

    pub fn occupant(&self) -> Option<&TileEntity> {
        self.occupant.as_ref()
    }

    pub fn tile_type(&self) -> Option<TileType> {
        self.occupant.as_ref().map(|tile| tile.tile_type)
    }

    /// True when nothing at all is attached, not even an empty placeholder
    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn set_occupant(&mut self, tile: TileEntity) -> Option<TileEntity> {
        self.occupant.replace(tile)
    }

    pub(crate) fn clear_occupant(&mut self) -> Option<TileEntity> {
        self.occupant.take()
    }
}
