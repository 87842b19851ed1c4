use tufia_client::{AccountData, FloorGeneration, SessionEvent, SyncConfig, SyncMessage, SyncSession};
use tufia_shared::{encode_board_snapshot, encode_player_record, BoardSnapshot, PlayerRecord};

/// Thin wrapper feeding encoded accounts into a [`SyncSession`]
pub struct TestSession {
    pub session: SyncSession,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    pub fn new() -> Self {
        Self {
            session: SyncSession::new(SyncConfig::default()),
        }
    }

    pub fn send_player(&mut self, player: &PlayerRecord) -> Vec<SessionEvent> {
        let data = AccountData::from(encode_player_record(player));
        self.send(SyncMessage::PlayerAccount(Some(data)))
    }

    /// Delivers `snapshot` under the session's current generation
    pub fn send_board(&mut self, snapshot: &BoardSnapshot) -> Vec<SessionEvent> {
        let generation = self.session.generation();
        self.send_board_as(generation, snapshot, false)
    }

    pub fn send_board_as(
        &mut self,
        generation: FloorGeneration,
        snapshot: &BoardSnapshot,
        reset: bool,
    ) -> Vec<SessionEvent> {
        let data = AccountData::from(encode_board_snapshot(snapshot));
        self.send(SyncMessage::BoardAccount {
            generation,
            data: Some(data),
            reset,
        })
    }

    pub fn send(&mut self, message: SyncMessage) -> Vec<SessionEvent> {
        self.session.receive(message);
        self.session.process_messages();
        self.session.take_events()
    }
}
