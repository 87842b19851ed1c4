mod action_log;
mod board_cell;
mod board_event;
mod board_store;
mod error;
mod reconciler;

pub use action_log::ActionLog;
pub use board_cell::BoardCell;
pub use board_event::{BoardEvent, ResyncReason};
pub use board_store::BoardStore;
pub use error::BoardError;
pub use reconciler::{BoardReconciler, SyncState};
