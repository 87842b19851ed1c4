use tufia_shared::ActionRequest;

use super::{AccountData, FloorGeneration};

/// Input delivered to a [`super::SyncSession`] by the transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncMessage {
    /// New contents of the player account, `None` if it does not exist
    PlayerAccount(Option<AccountData>),
    /// New contents of the floor account, tagged with the generation the
    /// subscription was opened under
    BoardAccount {
        generation: FloorGeneration,
        data: Option<AccountData>,
        reset: bool,
    },
    /// A submitted instruction was rejected, `code` is the custom program
    /// error if the ledger reported one
    TransactionFailed {
        request: ActionRequest,
        code: Option<u32>,
    },
}
