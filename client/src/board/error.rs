use thiserror::Error;

use tufia_shared::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Coordinate {coordinate} is outside the board")]
    OutOfBoundsCoordinate { coordinate: Coordinate },
}
