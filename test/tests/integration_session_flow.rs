/// INTEGRATION TESTS: Sync session message flow
///
/// Feeds encoded player and floor accounts through a `SyncSession` and checks
/// the events it emits, including stale subscription handling.

use tufia_client::{
    AccountData, BoardEvent, ResyncReason, SessionEvent, SyncMessage, SyncState,
};
use tufia_shared::{
    encode_board_snapshot, encode_player_record, ActionRequest, ActionType, PlayerRecord,
    ProgramErrorCode, TileType,
};
use tufia_test::{tile_builder::identity, SnapshotBuilder, TestSession, TileBuilder};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

fn player_on_floor(floor: u16) -> PlayerRecord {
    PlayerRecord {
        authority: identity(1),
        name: "ada".to_string(),
        current_floor: floor,
        energy: 40,
        ..PlayerRecord::default()
    }
}

#[test]
fn initial_data_loaded_fires_once() {
    init_logging();
    let mut test = TestSession::new();
    let snapshot = SnapshotBuilder::new(1).build();

    let events = test.send_player(&player_on_floor(0));
    assert!(!events.contains(&SessionEvent::InitialDataLoaded));

    let events = test.send_board(&snapshot);
    assert_eq!(events.last(), Some(&SessionEvent::InitialDataLoaded));

    let events = test.send_board(&snapshot);
    assert!(!events.contains(&SessionEvent::InitialDataLoaded));
    let events = test.send_player(&player_on_floor(0));
    assert!(!events.contains(&SessionEvent::InitialDataLoaded));
    assert!(test.session.is_initial_data_loaded());
}

#[test]
fn board_events_follow_board_data_changed() {
    let mut test = TestSession::new();
    let snapshot = SnapshotBuilder::new(5).build();

    let events = test.send_board(&snapshot);

    assert_eq!(
        events,
        vec![
            SessionEvent::BoardDataChanged {
                snapshot: Some(Box::new(snapshot)),
                reset: false,
            },
            SessionEvent::Board(BoardEvent::Materialized {
                floor_id: 5,
                reason: ResyncReason::Initial,
            }),
        ]
    );
}

#[test]
fn stale_generation_is_discarded() {
    init_logging();
    let mut test = TestSession::new();
    let old_generation = test.session.generation();
    test.send_board(&SnapshotBuilder::new(1).build());

    let new_generation = test.session.begin_floor();
    assert_ne!(old_generation, new_generation);

    // the resync for the previous floor arrives late
    let late = SnapshotBuilder::new(1)
        .tile(5, 5, TileBuilder::enemy().build())
        .build();
    let events = test.send_board_as(old_generation, &late, true);
    assert!(events.is_empty());
    assert_eq!(test.session.snapshot().map(|snapshot| snapshot.floor_id), Some(1));
    assert_eq!(
        test.session.board().get_cell(5, 5).and_then(|cell| cell.tile_type()),
        Some(TileType::Empty)
    );

    let events = test.send_board_as(new_generation, &SnapshotBuilder::new(2).build(), true);
    assert!(events.contains(&SessionEvent::Board(BoardEvent::Materialized {
        floor_id: 2,
        reason: ResyncReason::ExplicitReset,
    })));
}

#[test]
fn floor_change_requests_resubscription() {
    let mut test = TestSession::new();
    test.send_player(&player_on_floor(0));
    let before = test.session.generation();

    let events = test.send_player(&player_on_floor(1));

    let generation = test.session.generation();
    assert_ne!(generation, before);
    assert!(events.contains(&SessionEvent::ResubscribeRequested { generation }));
    assert_eq!(test.session.floor_seed().to_string(), "floorssssssssss1");
}

#[test]
fn same_floor_does_not_resubscribe() {
    let mut test = TestSession::new();
    test.send_player(&player_on_floor(2));
    let events = test.send_player(&player_on_floor(2));

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SessionEvent::PlayerDataChanged(_)));
}

#[test]
fn player_death_bumps_generation() {
    let mut test = TestSession::new();
    let start = SnapshotBuilder::new(1)
        .tile(0, 0, TileBuilder::player(identity(1)).build())
        .build();
    test.send_board(&start);
    let before = test.session.generation();

    let died = SnapshotBuilder::from_snapshot(start)
        .clear(0, 0)
        .marker(3, ActionType::PlayerDied)
        .build();
    let events = test.send_board(&died);

    let generation = test.session.generation();
    assert_ne!(generation, before);
    assert!(events.contains(&SessionEvent::Board(BoardEvent::ResubscribeRequested)));
    assert_eq!(
        events.last(),
        Some(&SessionEvent::ResubscribeRequested { generation })
    );
}

#[test]
fn undecodable_board_is_absent() {
    init_logging();
    let mut test = TestSession::new();
    test.send_board(&SnapshotBuilder::new(1).build());

    // a player account delivered on the floor subscription
    let generation = test.session.generation();
    let events = test.send(SyncMessage::BoardAccount {
        generation,
        data: Some(AccountData::from(encode_player_record(&player_on_floor(0)))),
        reset: false,
    });

    assert_eq!(
        events[0],
        SessionEvent::BoardDataChanged {
            snapshot: None,
            reset: false,
        }
    );
    assert_eq!(events[1], SessionEvent::Board(BoardEvent::Cleared));
    assert_eq!(test.session.reconciler().state(), SyncState::Uninitialized);
    assert_eq!(test.session.board().occupied_count(), 0);
}

#[test]
fn base64_accounts_are_accepted() {
    let mut test = TestSession::new();
    let snapshot = SnapshotBuilder::new(9).build();
    let generation = test.session.generation();

    test.send(SyncMessage::BoardAccount {
        generation,
        data: Some(AccountData::Base64(base64::encode(encode_board_snapshot(
            &snapshot,
        )))),
        reset: false,
    });

    assert_eq!(test.session.snapshot(), Some(&snapshot));
}

#[test]
fn absent_player_clears_record() {
    let mut test = TestSession::new();
    test.send_player(&player_on_floor(0));
    assert!(test.session.player().is_some());

    let events = test.send(SyncMessage::PlayerAccount(None));

    assert!(events.is_empty());
    assert!(test.session.player().is_none());
}

#[test]
fn initial_data_loaded_for_new_player() {
    let mut test = TestSession::new();

    // no PlayerData account exists before init_player
    let events = test.send(SyncMessage::PlayerAccount(None));
    assert!(events.is_empty());

    let events = test.send_board(&SnapshotBuilder::new(1).build());

    assert_eq!(events.last(), Some(&SessionEvent::InitialDataLoaded));
    assert!(test.session.is_initial_data_loaded());
    assert!(test.session.player().is_none());
}

#[test]
fn failed_transaction_is_reported() {
    let mut test = TestSession::new();
    let events = test.send(SyncMessage::TransactionFailed {
        request: ActionRequest::MoveToTile { x: 1, y: 1 },
        code: Some(6000),
    });

    assert_eq!(
        events,
        vec![SessionEvent::TransactionFailed {
            request: ActionRequest::MoveToTile { x: 1, y: 1 },
            error: Some(ProgramErrorCode::NotEnoughEnergy),
        }]
    );
}

#[test]
fn energy_regenerates_from_last_login() {
    let mut test = TestSession::new();
    let player = PlayerRecord {
        energy: 40,
        last_login: 1_000,
        ..player_on_floor(0)
    };
    test.send_player(&player);

    assert_eq!(test.session.current_energy(1_000), Some(40));
    assert_eq!(test.session.current_energy(1_000 + 59), Some(40));
    assert_eq!(test.session.current_energy(1_000 + 60 * 5), Some(45));
    assert_eq!(test.session.current_energy(1_000 + 60 * 1_000), Some(100));
}
