mod account_data;
mod cell_intent;
mod floor_generation;
mod session_event;
mod sync_message;
mod sync_session;
mod transaction_tracker;

pub use account_data::{AccountData, AccountDataError};
pub use cell_intent::{resolve_cell_intent, CellIntent, IgnoreReason};
pub use floor_generation::FloorGeneration;
pub use session_event::SessionEvent;
pub use sync_message::SyncMessage;
pub use sync_session::SyncSession;
pub use transaction_tracker::{
    PendingWrite, PreparedTransaction, TransactionTracker, WriteKind, WriteSignal,
};
