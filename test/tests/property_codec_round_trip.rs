/// PROPERTY-BASED TESTS: Account codec round trips
///
/// Key invariants:
/// 1. decode(encode(v)) == v for every record
/// 2. encode(decode(bytes)) == bytes for any fixed-layout account body,
///    including tile and action bytes outside the known enum range

use proptest::prelude::*;
use tufia_shared::{
    decode_board_snapshot, decode_game_action, decode_player_record, decode_tile_entity,
    encode_board_snapshot, encode_game_action, encode_player_record, encode_tile_entity,
    AccountKind, ActionType, BoardSnapshot, ConstByteLength, GameAction, Identity, PlayerRecord,
    TileEntity, TileType, DISCRIMINATOR_LENGTH,
};

fn identity_strategy() -> impl Strategy<Value = Identity> {
    any::<[u8; 32]>().prop_map(Identity::new)
}

fn tile_strategy() -> impl Strategy<Value = TileEntity> {
    (
        any::<u8>(),
        any::<u32>(),
        identity_strategy(),
        any::<[u32; 7]>(),
    )
        .prop_map(|(tile_type, level, owner, stats)| TileEntity {
            tile_type: TileType::from(tile_type),
            level,
            owner,
            xp: stats[0],
            damage: stats[1],
            defence: stats[2],
            armor: stats[3],
            max_armor: stats[4],
            health: stats[5],
            max_health: stats[6],
        })
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    (
        any::<u64>(),
        any::<u8>(),
        any::<[u8; 4]>(),
        tile_strategy(),
        any::<u64>(),
    )
        .prop_map(|(action_id, action_type, coordinates, tile, amount)| GameAction {
            action_id,
            action_type: ActionType::from(action_type),
            from_x: coordinates[0],
            from_y: coordinates[1],
            to_x: coordinates[2],
            to_y: coordinates[3],
            tile,
            amount,
        })
}

fn player_strategy() -> impl Strategy<Value = PlayerRecord> {
    (
        identity_strategy(),
        ".{0,24}",
        any::<[u32; 9]>(),
        any::<i64>(),
        any::<(u16, u16)>(),
        tile_strategy(),
    )
        .prop_map(|(authority, name, stats, last_login, (last_id, current_floor), tile)| {
            PlayerRecord {
                authority,
                name,
                level: stats[0],
                xp: stats[1],
                health: stats[2],
                max_health: stats[3],
                damage: stats[4],
                defence: stats[5],
                swords: stats[6],
                shields: stats[7],
                energy: stats[8],
                last_login,
                last_id,
                current_floor,
                tile,
            }
        })
}

fn snapshot_strategy() -> impl Strategy<Value = BoardSnapshot> {
    (
        any::<(u64, u64, u64, u32)>(),
        prop::collection::vec(tile_strategy(), 100),
        prop::collection::vec(action_strategy(), 20),
        identity_strategy(),
    )
        .prop_map(|((id_counter, action_index, wood, floor_id), tiles, actions, owner)| {
            let mut snapshot = BoardSnapshot {
                id_counter,
                action_index,
                total_wood_collected: wood,
                floor_id,
                owner,
                ..BoardSnapshot::default()
            };
            for (index, tile) in tiles.into_iter().enumerate() {
                snapshot.tiles[index / 10][index % 10] = tile;
            }
            for (slot, action) in actions.into_iter().enumerate() {
                snapshot.actions[slot] = action;
            }
            snapshot
        })
}

proptest! {
    #[test]
    fn prop_tile_round_trip(tile in tile_strategy()) {
        let bytes = encode_tile_entity(&tile);
        prop_assert_eq!(bytes.len(), TileEntity::const_byte_length());
        let (decoded, consumed) = decode_tile_entity(&bytes, 0).unwrap();
        prop_assert_eq!(consumed, bytes.len());
        prop_assert_eq!(decoded, tile);
    }

    #[test]
    fn prop_action_round_trip(action in action_strategy()) {
        let bytes = encode_game_action(&action);
        let (decoded, consumed) = decode_game_action(&bytes, 0).unwrap();
        prop_assert_eq!(consumed, GameAction::const_byte_length());
        prop_assert_eq!(decoded, action);
    }

    #[test]
    fn prop_player_round_trip(player in player_strategy()) {
        let bytes = encode_player_record(&player);
        prop_assert_eq!(decode_player_record(&bytes).unwrap(), player);
    }

    #[test]
    fn prop_tile_bytes_survive(bytes in prop::collection::vec(any::<u8>(), 65)) {
        let (tile, _) = decode_tile_entity(&bytes, 0).unwrap();
        prop_assert_eq!(encode_tile_entity(&tile), bytes);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_snapshot_round_trip(snapshot in snapshot_strategy()) {
        let bytes = encode_board_snapshot(&snapshot);
        prop_assert_eq!(bytes.len(), DISCRIMINATOR_LENGTH + BoardSnapshot::const_byte_length());
        prop_assert_eq!(decode_board_snapshot(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn prop_snapshot_bytes_survive(body in prop::collection::vec(any::<u8>(), 8280)) {
        let mut bytes = AccountKind::GameData.discriminator().to_le_bytes().to_vec();
        bytes.extend_from_slice(&body);
        let snapshot = decode_board_snapshot(&bytes).unwrap();
        prop_assert_eq!(encode_board_snapshot(&snapshot), bytes);
    }
}
