mod board_snapshot;
pub mod codec;
mod discriminator;
mod error;
mod game_action;
mod player_record;
mod tile_entity;

pub use board_snapshot::{ActionRing, BoardSnapshot, TileGrid};
pub use discriminator::{Account, AccountKind, DISCRIMINATOR_LENGTH};
pub use error::DecodeError;
pub use game_action::{ActionType, GameAction};
pub use player_record::{EnergyConfig, PlayerRecord};
pub use tile_entity::{TileEntity, TileType};
