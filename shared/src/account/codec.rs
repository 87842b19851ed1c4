//! Entry points for decoding and encoding ledger account blobs.
//!
//! Nested records (`TileEntity`, `GameAction`) decode at an arbitrary offset
//! and report how many bytes they consumed. Top-level accounts start at
//! offset 0 with their discriminator.

use tufia_serde::{ByteReader, ByteWriter, Serde};

use super::{
    discriminator::Account, error::DecodeError, BoardSnapshot, GameAction, PlayerRecord,
    TileEntity,
};

fn decode_at<T: Serde>(buffer: &[u8], offset: usize) -> Result<(T, usize), DecodeError> {
    let mut reader = ByteReader::at(buffer, offset);
    let value = T::de(&mut reader)?;
    Ok((value, reader.offset() - offset))
}

fn encode<T: Serde>(value: &T) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(value.byte_length());
    value.ser(&mut writer);
    writer.to_bytes()
}

pub fn decode_tile_entity(buffer: &[u8], offset: usize) -> Result<(TileEntity, usize), DecodeError> {
    decode_at(buffer, offset)
}

pub fn decode_game_action(buffer: &[u8], offset: usize) -> Result<(GameAction, usize), DecodeError> {
    decode_at(buffer, offset)
}

pub fn decode_player_record(buffer: &[u8]) -> Result<PlayerRecord, DecodeError> {
    PlayerRecord::decode_account(buffer)
}

pub fn decode_board_snapshot(buffer: &[u8]) -> Result<BoardSnapshot, DecodeError> {
    BoardSnapshot::decode_account(buffer)
}

pub fn encode_tile_entity(tile: &TileEntity) -> Vec<u8> {
    encode(tile)
}

pub fn encode_game_action(action: &GameAction) -> Vec<u8> {
    encode(action)
}

pub fn encode_player_record(player: &PlayerRecord) -> Vec<u8> {
    player.encode_account()
}

pub fn encode_board_snapshot(snapshot: &BoardSnapshot) -> Vec<u8> {
    snapshot.encode_account()
}
