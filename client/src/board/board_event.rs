use tufia_shared::{ActionId, Coordinate, FloorId, TileEntity};

/// Why the local board was rebuilt from a snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResyncReason {
    /// First snapshot after the board was torn down
    Initial,
    /// The caller flagged the snapshot as a reset
    ExplicitReset,
    /// The snapshot belongs to a different floor than the one on screen
    FloorChanged,
    /// Replay finished but the local grid disagreed with the snapshot
    Divergence { at: Coordinate },
    /// A `Reset` action was found in the ring
    ResetAction,
    /// A `PlayerDied` action was found in the ring
    PlayerDied,
}

/// Changes the reconciler made to the board, in the order they happened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// Every occupant was detached
    Cleared,
    /// Every cell was rebuilt from the snapshot of `floor_id`
    Materialized {
        floor_id: FloorId,
        reason: ResyncReason,
    },
    TileMoved {
        action_id: ActionId,
        from: Coordinate,
        to: Coordinate,
        tile: TileEntity,
    },
    /// A fight was recorded at `at`, `previous` is the local occupant before
    /// the snapshot and `tile` the combatant as the ledger recorded it
    Combat {
        action_id: ActionId,
        at: Coordinate,
        tile: TileEntity,
        previous: Option<TileEntity>,
        amount: u64,
    },
    /// The player died, subscriptions for the player and the floor must be
    /// re-established
    ResubscribeRequested,
}
