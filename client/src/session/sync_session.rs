use std::collections::VecDeque;

use log::{debug, info, warn};

use tufia_shared::{
    BoardSnapshot, Coordinate, FloorSeed, Identity, PlayerRecord, ProgramErrorCode,
};

use crate::{
    board::{BoardEvent, BoardReconciler, BoardStore},
    SyncConfig,
};

use super::{
    resolve_cell_intent, AccountData, CellIntent, FloorGeneration, SessionEvent, SyncMessage,
    WriteSignal,
};

/// Client side of one player's connection to the ledger.
///
/// Messages are queued with [`SyncSession::receive`] and handled strictly one
/// at a time by [`SyncSession::process_messages`], so only one reconciliation
/// is ever in flight.
pub struct SyncSession {
    config: SyncConfig,
    reconciler: BoardReconciler,
    board: BoardStore,
    player: Option<PlayerRecord>,
    generation: FloorGeneration,
    incoming_messages: VecDeque<SyncMessage>,
    outgoing_events: Vec<SessionEvent>,
    received_player: bool,
    received_board: bool,
    initial_data_loaded: bool,
}

impl SyncSession {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            reconciler: BoardReconciler::new(),
            board: BoardStore::new(),
            player: None,
            generation: FloorGeneration::default(),
            incoming_messages: VecDeque::new(),
            outgoing_events: Vec::new(),
            received_player: false,
            received_board: false,
            initial_data_loaded: false,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardStore {
        &self.board
    }

    pub fn reconciler(&self) -> &BoardReconciler {
        &self.reconciler
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.reconciler.snapshot()
    }

    pub fn player(&self) -> Option<&PlayerRecord> {
        self.player.as_ref()
    }

    pub fn generation(&self) -> FloorGeneration {
        self.generation
    }

    pub fn is_initial_data_loaded(&self) -> bool {
        self.initial_data_loaded
    }

    /// Starts a new floor subscription. Board data tagged with an older
    /// generation is discarded from now on.
    pub fn begin_floor(&mut self) -> FloorGeneration {
        self.generation = self.generation.next();
        debug!("Beginning floor generation {}", self.generation);
        self.generation
    }

    pub fn receive(&mut self, message: SyncMessage) {
        self.incoming_messages.push_back(message);
    }

    pub fn has_pending_messages(&self) -> bool {
        !self.incoming_messages.is_empty()
    }

    pub fn process_messages(&mut self) {
        while let Some(message) = self.incoming_messages.pop_front() {
            self.process_message(message);
        }
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.outgoing_events)
    }

    /// Seed of the floor the player is currently on
    pub fn floor_seed(&self) -> FloorSeed {
        let floor = self.player.as_ref().map_or(0, |player| player.current_floor);
        FloorSeed::new(self.config.floor_seed_prefix.clone(), floor)
    }

    /// Energy the player has at unix time `now`, counting regeneration
    pub fn current_energy(&self, now: i64) -> Option<u32> {
        self.player
            .as_ref()
            .map(|player| player.current_energy(now, &self.config.energy))
    }

    /// Input should wait while a blocking write is in flight
    pub fn is_waiting(&self, writes: &dyn WriteSignal) -> bool {
        writes.is_blocking_write_outstanding()
    }

    pub fn resolve_cell_intent(&self, identity: &Identity, target: Coordinate) -> CellIntent {
        resolve_cell_intent(self.snapshot(), &self.board, identity, target)
    }

    fn process_message(&mut self, message: SyncMessage) {
        match message {
            SyncMessage::PlayerAccount(data) => self.process_player(data),
            SyncMessage::BoardAccount {
                generation,
                data,
                reset,
            } => self.process_board(generation, data, reset),
            SyncMessage::TransactionFailed { request, code } => {
                let error = code.and_then(ProgramErrorCode::from_code);
                match error {
                    Some(error) => warn!("{} failed: {}", request.name(), error),
                    None => warn!("{} failed with code {:?}", request.name(), code),
                }
                self.outgoing_events
                    .push(SessionEvent::TransactionFailed { request, error });
            }
        }
    }

    fn process_player(&mut self, data: Option<AccountData>) {
        let record = data.and_then(|data| match data.decode_player() {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("Treating player account as absent: {}", err);
                None
            }
        });

        let Some(record) = record else {
            debug!("Player account absent");
            self.player = None;
            self.received_player = true;
            self.check_initial_data_loaded();
            return;
        };

        let previous_floor = self.player.as_ref().map(|player| player.current_floor);
        let floor_changed = previous_floor.is_some_and(|floor| floor != record.current_floor);
        self.player = Some(record.clone());
        self.outgoing_events
            .push(SessionEvent::PlayerDataChanged(record));

        if floor_changed {
            info!("Player moved to floor {}, resubscribing", self.floor_seed());
            self.request_resubscribe();
        }

        self.received_player = true;
        self.check_initial_data_loaded();
    }

    fn process_board(&mut self, generation: FloorGeneration, data: Option<AccountData>, reset: bool) {
        if generation != self.generation {
            debug!(
                "Dropping board data from generation {}, current is {}",
                generation, self.generation
            );
            return;
        }

        let snapshot = data.and_then(|data| match data.decode_board() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("Treating board account as absent: {}", err);
                None
            }
        });

        self.outgoing_events.push(SessionEvent::BoardDataChanged {
            snapshot: snapshot.clone().map(Box::new),
            reset,
        });

        let events = self
            .reconciler
            .apply_snapshot(&mut self.board, snapshot, reset);
        for event in events {
            let resubscribe = event == BoardEvent::ResubscribeRequested;
            self.outgoing_events.push(SessionEvent::Board(event));
            if resubscribe {
                self.request_resubscribe();
            }
        }

        self.received_board = true;
        self.check_initial_data_loaded();
    }

    fn request_resubscribe(&mut self) {
        let generation = self.begin_floor();
        self.outgoing_events
            .push(SessionEvent::ResubscribeRequested { generation });
    }

    fn check_initial_data_loaded(&mut self) {
        if self.initial_data_loaded || !self.received_player || !self.received_board {
            return;
        }
        self.initial_data_loaded = true;
        info!("Initial data loaded");
        self.outgoing_events.push(SessionEvent::InitialDataLoaded);
    }
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::new(SyncConfig::default())
    }
}
