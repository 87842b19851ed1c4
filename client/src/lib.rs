//! # Tufia Client
//! Keeps a local tufia board in sync with the floor and player accounts
//! published by the ledger.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tufia_shared as shared;

mod board;
mod config;
mod session;

cfg_if::cfg_if! {
    if #[cfg(feature = "async_driver")] {
        mod driver;
        pub use driver::SyncDriver;
    }
}

pub use board::{
    ActionLog, BoardCell, BoardError, BoardEvent, BoardReconciler, BoardStore, ResyncReason,
    SyncState,
};
pub use config::SyncConfig;
pub use session::{
    resolve_cell_intent, AccountData, AccountDataError, CellIntent, FloorGeneration,
    IgnoreReason, PendingWrite, PreparedTransaction, SessionEvent, SyncMessage, SyncSession,
    TransactionTracker, WriteKind, WriteSignal,
};
