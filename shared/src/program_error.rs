use thiserror::Error;

/// Error codes returned by the ledger program when a transaction fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProgramErrorCode {
    #[error("Not enough energy")]
    NotEnoughEnergy,
    #[error("Wrong authority")]
    WrongAuthority,
    #[error("Player not on board")]
    PlayerNotOnBoard,
    #[error("Out of bounds")]
    OutOfBounds,
    #[error("Player already exists")]
    PlayerAlreadyExists,
    #[error("Board is full")]
    BoardIsFull,
    #[error("Player is already on this tile")]
    PlayerIsAlreadyOnThisTile,
}

impl ProgramErrorCode {
    const FIRST_CODE: u32 = 6000;

    pub fn from_code(code: u32) -> Option<Self> {
        match code.checked_sub(Self::FIRST_CODE)? {
            0 => Some(ProgramErrorCode::NotEnoughEnergy),
            1 => Some(ProgramErrorCode::WrongAuthority),
            2 => Some(ProgramErrorCode::PlayerNotOnBoard),
            3 => Some(ProgramErrorCode::OutOfBounds),
            4 => Some(ProgramErrorCode::PlayerAlreadyExists),
            5 => Some(ProgramErrorCode::BoardIsFull),
            6 => Some(ProgramErrorCode::PlayerIsAlreadyOnThisTile),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        Self::FIRST_CODE
            + match self {
                ProgramErrorCode::NotEnoughEnergy => 0,
                ProgramErrorCode::WrongAuthority => 1,
                ProgramErrorCode::PlayerNotOnBoard => 2,
                ProgramErrorCode::OutOfBounds => 3,
                ProgramErrorCode::PlayerAlreadyExists => 4,
                ProgramErrorCode::BoardIsFull => 5,
                ProgramErrorCode::PlayerIsAlreadyOnThisTile => 6,
            }
    }
}
