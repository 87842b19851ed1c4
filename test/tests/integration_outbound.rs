/// INTEGRATION TESTS: From a board click to instruction bytes
///
/// Resolves clicks against a synced session and encodes the resulting
/// instruction with the floor seed and transaction counter.

use tufia_client::{CellIntent, IgnoreReason, TransactionTracker, WriteKind, WriteSignal};
use tufia_shared::{ActionRequest, Coordinate, PlayerRecord, TileType};
use tufia_test::{tile_builder::identity, SnapshotBuilder, TestSession, TileBuilder};

fn session_on_floor(floor: u16, snapshot: SnapshotBuilder) -> TestSession {
    let mut test = TestSession::new();
    test.send_player(&PlayerRecord {
        authority: identity(1),
        current_floor: floor,
        ..PlayerRecord::default()
    });
    test.send_board(&snapshot.build());
    test
}

#[test]
fn click_on_empty_cell_becomes_move_to_tile() {
    let test = session_on_floor(
        2,
        SnapshotBuilder::new(2).tile(0, 0, TileBuilder::player(identity(1)).build()),
    );
    let mut tracker = TransactionTracker::new();

    let intent = test.session.resolve_cell_intent(&identity(1), Coordinate::new(1, 0));
    let request = intent.request().unwrap();
    let seed = test.session.floor_seed();
    let prepared = tracker.prepare(request, &seed, WriteKind::Blocking);

    assert_eq!(request, ActionRequest::MoveToTile { x: 1, y: 0 });
    assert_eq!(seed.to_string(), "floorssssssssss2");
    assert_eq!(prepared.data, request.encode(&seed, 1));
    assert_eq!(&prepared.data[8..12], &16u32.to_le_bytes());
    assert_eq!(&prepared.data[12..28], b"floorssssssssss2");
    assert_eq!(&prepared.data[28..30], &1u16.to_le_bytes());
    assert_eq!(&prepared.data[30..38], &1u64.to_le_bytes());
    assert_eq!(&prepared.data[38..46], &0u64.to_le_bytes());
    assert_eq!(prepared.data.len(), 46);

    assert!(test.session.is_waiting(&tracker));
    tracker.finish(prepared.write);
    assert!(!test.session.is_waiting(&tracker));
}

#[test]
fn background_write_does_not_block_input() {
    let test = session_on_floor(0, SnapshotBuilder::new(0));
    let mut tracker = TransactionTracker::new();

    let prepared = tracker.prepare(
        ActionRequest::ResetFloor,
        &test.session.floor_seed(),
        WriteKind::NonBlocking,
    );

    assert!(!test.session.is_waiting(&tracker));
    assert!(tracker.is_write_outstanding());
    tracker.finish(prepared.write);
}

#[test]
fn stairs_unlock_when_floor_is_cleared() {
    let me = TileBuilder::player(identity(1)).build();
    let locked = session_on_floor(
        0,
        SnapshotBuilder::new(0)
            .tile(0, 0, me.clone())
            .tile(9, 9, TileBuilder::new(TileType::Stairs).build())
            .tile(5, 5, TileBuilder::enemy().build()),
    );
    assert_eq!(
        locked.session.resolve_cell_intent(&identity(1), Coordinate::new(9, 9)),
        CellIntent::StairsLocked {
            enemies_remaining: 1
        }
    );

    let open = session_on_floor(
        0,
        SnapshotBuilder::new(0)
            .tile(0, 0, me)
            .tile(9, 9, TileBuilder::new(TileType::Stairs).build()),
    );
    let intent = open.session.resolve_cell_intent(&identity(1), Coordinate::new(9, 9));
    assert_eq!(intent.request(), Some(ActionRequest::MoveToNextFloor));
    assert_eq!(open.session.floor_seed().next().to_string(), "floorssssssssss1");
}

#[test]
fn dead_player_cannot_fight() {
    let test = session_on_floor(
        0,
        SnapshotBuilder::new(0)
            .tile(0, 0, TileBuilder::player(identity(1)).health(0).build())
            .tile(0, 1, TileBuilder::enemy().build()),
    );

    assert_eq!(
        test.session.resolve_cell_intent(&identity(1), Coordinate::new(0, 1)),
        CellIntent::Ignored(IgnoreReason::PlayerDead)
    );
}

#[test]
fn attack_carries_the_defender() {
    let goblin = TileBuilder::enemy().health(7).damage(2).build();
    let test = session_on_floor(
        0,
        SnapshotBuilder::new(0)
            .tile(0, 0, TileBuilder::player(identity(1)).build())
            .tile(0, 1, goblin.clone()),
    );

    assert_eq!(
        test.session.resolve_cell_intent(&identity(1), Coordinate::new(0, 1)),
        CellIntent::Attack {
            target: Coordinate::new(0, 1),
            defender: goblin,
        }
    );
}
