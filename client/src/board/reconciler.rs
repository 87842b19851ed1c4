//! ## `BoardReconciler` – Snapshot to Board Bridge
//!
//! Owns the **state machine that keeps the local [`BoardStore`] equal to the
//! latest authoritative [`BoardSnapshot`]** of the floor being played.
//!
//! ---
//! ### 1 · What problem does it solve?
//! * Snapshots arrive as whole accounts, but the board should animate the
//!   individual actions recorded in the snapshot's action ring.
//! * The ring only holds the last 20 actions. Anything evicted before the
//!   client saw it is lost, so replay alone cannot be trusted.
//!
//! The reconciler replays every unseen action once, then compares the whole
//! grid against the snapshot and rebuilds it from scratch on any mismatch.
//!
//! ---
//! ### 2 · State machine
//!
//! ```text
//!            +------------------------------+
//!            |   Uninitialized (initial)    |<---------- teardown / None
//!            +------------------------------+
//!                 | first snapshot
//!                 v
//!            +------------------------------+  same-floor snapshot   +-----------+
//!            |           Synced             |----------------------->| Replaying |
//!            +------------------------------+<-----------------------+-----------+
//!                 ^                               grid matches             |
//!                 |                                                        | mismatch, reset,
//!            +------------------------------+                              | floor change,
//!            |          Resyncing           |<-----------------------------+ Reset / PlayerDied
//!            +------------------------------+
//! ```
//!
//! * **`Uninitialized`** – board is empty; the next snapshot is materialized
//!   and every recorded action id is marked seen without being replayed.
//! * **`Synced`** – board matches the last snapshot.
//! * **`Replaying`** – walking the ring in slot order, applying each action
//!   whose id is non-zero and unseen, then marking it seen.
//! * **`Resyncing`** – occupants torn down, action log cleared, every cell
//!   rebuilt from the snapshot, every recorded id marked seen.
//!
//! Both transient states resolve before `apply_snapshot` returns.
//!
//! ---
//! ### 3 · Key invariants
//! * **At-most-once replay** – an action id is applied at most once between
//!   two resyncs. Re-delivering a snapshot changes nothing.
//! * **Convergence** – after `apply_snapshot` returns `Synced`, every cell's
//!   tile type equals the snapshot's.
//! * **Single writer** – nothing else mutates the store.

use log::{debug, info, warn};

use tufia_shared::{ActionType, BoardSnapshot, Coordinate, GameAction, TileEntity};

use super::{ActionLog, BoardError, BoardEvent, BoardStore, ResyncReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Synced,
    Replaying,
    Resyncing,
}

enum ReplayOutcome {
    Completed,
    ResyncRequired(ResyncReason),
}

pub struct BoardReconciler {
    state: SyncState,
    action_log: ActionLog,
    snapshot: Option<BoardSnapshot>,
}

impl Default for BoardReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardReconciler {
    pub fn new() -> Self {
        Self {
            state: SyncState::Uninitialized,
            action_log: ActionLog::new(),
            snapshot: None,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Last snapshot the board was reconciled against
    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    /// Detaches every occupant and forgets the current floor
    pub fn teardown(&mut self, store: &mut BoardStore) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        self.teardown_into(store, &mut events);
        events
    }

    /// Brings `store` in line with `snapshot`.
    ///
    /// `None` means the account is absent and tears the board down. `reset`
    /// forces a full rebuild instead of a replay.
    pub fn apply_snapshot(
        &mut self,
        store: &mut BoardStore,
        snapshot: Option<BoardSnapshot>,
        reset: bool,
    ) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        let Some(snapshot) = snapshot else {
            debug!("Board account absent, tearing down the board");
            self.teardown_into(store, &mut events);
            return events;
        };

        let previous_floor = self.snapshot.as_ref().map(|current| current.floor_id);

        if self.state == SyncState::Uninitialized {
            self.materialize(store, &snapshot, ResyncReason::Initial, &mut events);
        } else if reset {
            self.resync(store, &snapshot, ResyncReason::ExplicitReset, &mut events);
        } else if previous_floor != Some(snapshot.floor_id) {
            self.resync(store, &snapshot, ResyncReason::FloorChanged, &mut events);
        } else {
            match self.replay(store, &snapshot, &mut events) {
                ReplayOutcome::Completed => {
                    if let Some(at) = find_divergence(store, &snapshot) {
                        warn!(
                            "Board diverged from floor {} at {}, resyncing",
                            snapshot.floor_id, at
                        );
                        self.resync(store, &snapshot, ResyncReason::Divergence { at }, &mut events);
                    } else {
                        self.state = SyncState::Synced;
                    }
                }
                ReplayOutcome::ResyncRequired(reason) => {
                    self.resync(store, &snapshot, reason, &mut events);
                    if reason == ResyncReason::PlayerDied {
                        events.push(BoardEvent::ResubscribeRequested);
                    }
                }
            }
        }

        self.snapshot = Some(snapshot);
        events
    }

    fn replay(
        &mut self,
        store: &mut BoardStore,
        snapshot: &BoardSnapshot,
        events: &mut Vec<BoardEvent>,
    ) -> ReplayOutcome {
        self.state = SyncState::Replaying;

        for action in snapshot.actions.iter() {
            if action.is_empty_slot() || self.action_log.has_seen(action.action_id) {
                continue;
            }

            match action.action_type {
                ActionType::Move => {
                    if let Err(err) = apply_move(store, action, events) {
                        warn!("Skipping move {}: {}", action.action_id, err);
                    }
                }
                ActionType::Fight => match store.cell_at(action.target()) {
                    Some(cell) => events.push(BoardEvent::Combat {
                        action_id: action.action_id,
                        at: action.target(),
                        tile: action.tile.clone(),
                        previous: cell.occupant().cloned(),
                        amount: action.amount,
                    }),
                    None => warn!(
                        "Skipping fight {}: {}",
                        action.action_id,
                        BoardError::OutOfBoundsCoordinate {
                            coordinate: action.target()
                        }
                    ),
                },
                ActionType::OpenChest => {
                    // chest contents are not modelled on the board
                    debug!("Chest opened by action {}", action.action_id);
                }
                ActionType::Reset => {
                    info!("Reset action {} found, resyncing", action.action_id);
                    return ReplayOutcome::ResyncRequired(ResyncReason::ResetAction);
                }
                ActionType::PlayerDied => {
                    info!("Player died in action {}, resyncing", action.action_id);
                    return ReplayOutcome::ResyncRequired(ResyncReason::PlayerDied);
                }
                ActionType::Unknown(byte) => {
                    warn!(
                        "Ignoring action {} of unknown type {}",
                        action.action_id, byte
                    );
                }
            }

            self.action_log.mark_seen(action.action_id);
        }

        ReplayOutcome::Completed
    }

    fn resync(
        &mut self,
        store: &mut BoardStore,
        snapshot: &BoardSnapshot,
        reason: ResyncReason,
        events: &mut Vec<BoardEvent>,
    ) {
        self.state = SyncState::Resyncing;
        store.clear_all();
        events.push(BoardEvent::Cleared);
        self.materialize(store, snapshot, reason, events);
    }

    fn materialize(
        &mut self,
        store: &mut BoardStore,
        snapshot: &BoardSnapshot,
        reason: ResyncReason,
        events: &mut Vec<BoardEvent>,
    ) {
        store.clear_all();
        self.action_log.reset();

        for (coordinate, tile) in snapshot.iter_tiles() {
            if let Err(err) = store.set_occupant(coordinate, tile.clone()) {
                warn!("Could not place tile: {}", err);
            }
        }
        for action in snapshot.recorded_actions() {
            self.action_log.mark_seen(action.action_id);
        }

        debug!(
            "Materialized floor {} ({:?}), {} actions marked seen",
            snapshot.floor_id,
            reason,
            self.action_log.len()
        );
        self.state = SyncState::Synced;
        events.push(BoardEvent::Materialized {
            floor_id: snapshot.floor_id,
            reason,
        });
    }

    fn teardown_into(&mut self, store: &mut BoardStore, events: &mut Vec<BoardEvent>) {
        store.clear_all();
        self.action_log.reset();
        self.snapshot = None;
        self.state = SyncState::Uninitialized;
        events.push(BoardEvent::Cleared);
    }
}

fn apply_move(
    store: &mut BoardStore,
    action: &GameAction,
    events: &mut Vec<BoardEvent>,
) -> Result<(), BoardError> {
    let from = action.source();
    let to = action.target();
    for coordinate in [from, to] {
        if !coordinate.in_bounds() {
            return Err(BoardError::OutOfBoundsCoordinate { coordinate });
        }
    }

    store.set_occupant(from, TileEntity::empty())?;
    store.set_occupant(to, action.tile.clone())?;

    events.push(BoardEvent::TileMoved {
        action_id: action.action_id,
        from,
        to,
        tile: action.tile.clone(),
    });
    Ok(())
}

/// First cell whose local occupant disagrees with the snapshot
fn find_divergence(store: &BoardStore, snapshot: &BoardSnapshot) -> Option<Coordinate> {
    snapshot
        .iter_tiles()
        .find(|(coordinate, tile)| {
            match store.cell_at(*coordinate).and_then(|cell| cell.occupant()) {
                Some(occupant) => occupant.tile_type != tile.tile_type,
                None => !tile.is_empty(),
            }
        })
        .map(|(coordinate, _)| coordinate)
}
