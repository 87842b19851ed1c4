//! # Tufia Shared
//! Ledger account records, their byte codec, and outbound instruction
//! payloads shared by tufia clients.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tufia_serde::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

mod account;
mod constants;
mod floor_seed;
mod identity;
mod instruction;
mod program_error;
mod types;

pub use account::{
    codec::{
        decode_board_snapshot, decode_game_action, decode_player_record, decode_tile_entity,
        encode_board_snapshot, encode_game_action, encode_player_record, encode_tile_entity,
    },
    Account, AccountKind, ActionRing, ActionType, BoardSnapshot, DecodeError, EnergyConfig,
    GameAction, PlayerRecord, TileEntity, TileGrid, TileType, DISCRIMINATOR_LENGTH,
};
pub use constants::{ACTION_LOG_CAPACITY, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_ACTION_ID};
pub use floor_seed::{FloorSeed, DEFAULT_FLOOR_SEED_PREFIX};
pub use identity::{Identity, IDENTITY_LENGTH};
pub use instruction::ActionRequest;
pub use program_error::ProgramErrorCode;
pub use types::{ActionId, Coordinate, FloorId, FloorNumber, TransactionCounter};
