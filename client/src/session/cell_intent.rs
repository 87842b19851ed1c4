use tufia_shared::{ActionRequest, BoardSnapshot, Coordinate, Identity, TileEntity, TileType};

use crate::board::BoardStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    OutOfBounds,
    NoBoard,
    /// Local player is not on the board or has no health left
    PlayerDead,
    /// The clicked cell holds the local player
    OwnTile,
    UnknownTile(u8),
}

/// What a click on a board cell asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellIntent {
    Move(Coordinate),
    Attack {
        target: Coordinate,
        defender: TileEntity,
    },
    OpenChest(Coordinate),
    TakeStairs(Coordinate),
    StairsLocked { enemies_remaining: usize },
    Ignored(IgnoreReason),
}

impl CellIntent {
    /// Instruction that carries out this intent, if any
    pub fn request(&self) -> Option<ActionRequest> {
        match self {
            CellIntent::Move(coordinate)
            | CellIntent::Attack {
                target: coordinate, ..
            }
            | CellIntent::OpenChest(coordinate) => Some(ActionRequest::move_to(*coordinate)),
            CellIntent::TakeStairs(_) => Some(ActionRequest::MoveToNextFloor),
            CellIntent::StairsLocked { .. } | CellIntent::Ignored(_) => None,
        }
    }
}

/// Resolves a click on `target` for the player `identity`.
///
/// Tile types come from `snapshot`, liveness of the player from the local
/// `board`.
pub fn resolve_cell_intent(
    snapshot: Option<&BoardSnapshot>,
    board: &BoardStore,
    identity: &Identity,
    target: Coordinate,
) -> CellIntent {
    let Some(snapshot) = snapshot else {
        return CellIntent::Ignored(IgnoreReason::NoBoard);
    };
    let Some(tile) = snapshot.tile(target) else {
        return CellIntent::Ignored(IgnoreReason::OutOfBounds);
    };

    let player_cell = board.find_cell_by_owner(identity);
    let is_dead = player_cell
        .and_then(|cell| cell.occupant())
        .map_or(true, |player| player.health == 0);

    match tile.tile_type {
        TileType::Empty => CellIntent::Move(target),
        _ if is_dead => CellIntent::Ignored(IgnoreReason::PlayerDead),
        TileType::Player | TileType::Enemy => {
            if player_cell.map(|cell| cell.coordinate()) == Some(target) {
                return CellIntent::Ignored(IgnoreReason::OwnTile);
            }
            CellIntent::Attack {
                target,
                defender: tile.clone(),
            }
        }
        TileType::GoldChest | TileType::BlueChest => CellIntent::OpenChest(target),
        TileType::Stairs => match snapshot.count_tiles(TileType::Enemy) {
            0 => CellIntent::TakeStairs(target),
            enemies_remaining => CellIntent::StairsLocked { enemies_remaining },
        },
        TileType::Unknown(byte) => CellIntent::Ignored(IgnoreReason::UnknownTile(byte)),
    }
}
