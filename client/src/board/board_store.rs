use tufia_shared::{Coordinate, Identity, TileEntity, TileType, BOARD_HEIGHT, BOARD_WIDTH};

use super::{BoardCell, BoardError};

/// The locally rendered 10x10 grid. Only the reconciler writes to it.
#[derive(Clone, Debug)]
pub struct BoardStore {
    // indexed x * BOARD_HEIGHT + y
    cells: Vec<BoardCell>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(BOARD_WIDTH * BOARD_HEIGHT);
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_HEIGHT {
                cells.push(BoardCell::new(Coordinate::new(x as u8, y as u8)));
            }
        }
        Self { cells }
    }

    /// Bounds-checked lookup, anything outside `[0, 10)` yields `None`
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&BoardCell> {
        let index = Self::index(x, y)?;
        self.cells.get(index)
    }

    pub fn cell_at(&self, coordinate: Coordinate) -> Option<&BoardCell> {
        self.get_cell(i32::from(coordinate.x), i32::from(coordinate.y))
    }

    /// First cell holding a player tile owned by `identity`
    pub fn find_cell_by_owner(&self, identity: &Identity) -> Option<&BoardCell> {
        self.cells.iter().find(|cell| {
            cell.occupant()
                .is_some_and(|tile| tile.is_player_owned_by(identity))
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter()
    }

    /// Cells with an attached occupant, empty placeholders included
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_vacant()).count()
    }

    pub fn count_tiles(&self, tile_type: TileType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.tile_type() == Some(tile_type))
            .count()
    }

    pub fn clear_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_occupant();
        }
    }

    pub(crate) fn set_occupant(
        &mut self,
        coordinate: Coordinate,
        tile: TileEntity,
    ) -> Result<Option<TileEntity>, BoardError> {
        let cell = self.cell_mut(coordinate)?;
        Ok(cell.set_occupant(tile))
    }

    fn cell_mut(&mut self, coordinate: Coordinate) -> Result<&mut BoardCell, BoardError> {
        Self::index(i32::from(coordinate.x), i32::from(coordinate.y))
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(BoardError::OutOfBoundsCoordinate { coordinate })
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some(x * BOARD_HEIGHT + y)
    }
}
