use tufia_serde::{ByteWriter, Serde};

use crate::{Coordinate, FloorSeed, TransactionCounter};

/// Operations the client submits to the ledger program.
///
/// Only the instruction data is built here; account lists, signing and
/// sending belong to the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionRequest {
    InitPlayer,
    MoveToTile { x: u8, y: u8 },
    MoveToNextFloor,
    BuyNextFloor,
    ResetFloor,
}

impl ActionRequest {
    pub fn move_to(coordinate: Coordinate) -> Self {
        ActionRequest::MoveToTile {
            x: coordinate.x,
            y: coordinate.y,
        }
    }

    pub const fn discriminator(&self) -> u64 {
        match self {
            ActionRequest::InitPlayer => 4_819_994_211_046_333_298,
            ActionRequest::MoveToTile { .. } => 5_279_588_053_843_574_468,
            ActionRequest::MoveToNextFloor => 2_481_710_203_484_716_370,
            ActionRequest::BuyNextFloor => 7_033_119_409_976_356_332,
            ActionRequest::ResetFloor => 7_303_134_863_959_624_869,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ActionRequest::InitPlayer => "init_player",
            ActionRequest::MoveToTile { .. } => "move_to_tile",
            ActionRequest::MoveToNextFloor => "move_to_next_floor",
            ActionRequest::BuyNextFloor => "buy_next_floor",
            ActionRequest::ResetFloor => "reset_floor",
        }
    }

    /// Whether the instruction carries the per-session counter
    pub const fn is_counted(&self) -> bool {
        !matches!(self, ActionRequest::InitPlayer)
    }

    /// Instruction data: discriminator, seed, then counter and arguments.
    ///
    /// `init_player` takes no counter, so `counter` is ignored for it.
    pub fn encode(&self, seed: &FloorSeed, counter: TransactionCounter) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.discriminator().ser(&mut writer);
        seed.to_string().ser(&mut writer);
        if self.is_counted() {
            counter.ser(&mut writer);
        }
        if let ActionRequest::MoveToTile { x, y } = self {
            u64::from(*x).ser(&mut writer);
            u64::from(*y).ser(&mut writer);
        }
        writer.to_bytes()
    }
}
