use tufia_shared::{ActionRequest, BoardSnapshot, PlayerRecord, ProgramErrorCode};

use crate::board::BoardEvent;

use super::FloorGeneration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    PlayerDataChanged(PlayerRecord),
    BoardDataChanged {
        snapshot: Option<Box<BoardSnapshot>>,
        reset: bool,
    },
    /// Both the player and the board have been received at least once
    InitialDataLoaded,
    Board(BoardEvent),
    /// The transport must re-subscribe the player and floor accounts and tag
    /// board data with `generation` from now on
    ResubscribeRequested { generation: FloorGeneration },
    TransactionFailed {
        request: ActionRequest,
        error: Option<ProgramErrorCode>,
    },
}
