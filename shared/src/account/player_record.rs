use tufia_serde::{ByteReader, ByteWriter, Serde, SerdeErr};

use crate::{FloorNumber, Identity, TileEntity, TransactionCounter};

use super::discriminator::{Account, AccountKind};

/// Energy regeneration parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnergyConfig {
    /// Seconds it takes to regenerate one unit of energy
    pub refill_interval_secs: i64,
    /// Regeneration stops at this value
    pub max_energy: u32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            refill_interval_secs: 60,
            max_energy: 100,
        }
    }
}

/// Per-player progression, published as the `PlayerData` account
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub authority: Identity,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub health: u32,
    pub max_health: u32,
    pub damage: u32,
    pub defence: u32,
    pub swords: u32,
    pub shields: u32,
    /// Energy as of `last_login`; see [`PlayerRecord::current_energy`]
    pub energy: u32,
    /// Unix timestamp, seconds
    pub last_login: i64,
    /// Counter of the last transaction the ledger applied for this player
    pub last_id: TransactionCounter,
    pub current_floor: FloorNumber,
    /// Mirror of the player's tile on the board
    pub tile: TileEntity,
}

impl PlayerRecord {
    /// Energy the player has at `now`, counting regeneration since
    /// `last_login`. A stored value already at or above the cap is returned
    /// unchanged.
    pub fn current_energy(&self, now: i64, config: &EnergyConfig) -> u32 {
        if self.energy >= config.max_energy {
            return self.energy;
        }
        if config.refill_interval_secs <= 0 {
            return config.max_energy;
        }

        let elapsed = now.saturating_sub(self.last_login).max(0);
        let regenerated = elapsed / config.refill_interval_secs;
        let missing = i64::from(config.max_energy - self.energy);
        // bounded by `missing`, which fits in u32
        self.energy + regenerated.min(missing) as u32
    }

    /// Seconds until the next unit regenerates, or `None` when full
    pub fn seconds_until_next_energy(&self, now: i64, config: &EnergyConfig) -> Option<i64> {
        if self.current_energy(now, config) >= config.max_energy || config.refill_interval_secs <= 0 {
            return None;
        }
        let elapsed = now.saturating_sub(self.last_login).max(0);
        Some(config.refill_interval_secs - elapsed % config.refill_interval_secs)
    }
}

impl Serde for PlayerRecord {
    fn ser(&self, writer: &mut ByteWriter) {
        self.authority.ser(writer);
        self.name.ser(writer);
        self.level.ser(writer);
        self.xp.ser(writer);
        self.health.ser(writer);
        self.max_health.ser(writer);
        self.damage.ser(writer);
        self.defence.ser(writer);
        self.swords.ser(writer);
        self.shields.ser(writer);
        self.energy.ser(writer);
        self.last_login.ser(writer);
        self.last_id.ser(writer);
        self.current_floor.ser(writer);
        self.tile.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            authority: Identity::de(reader)?,
            name: String::de(reader)?,
            level: u32::de(reader)?,
            xp: u32::de(reader)?,
            health: u32::de(reader)?,
            max_health: u32::de(reader)?,
            damage: u32::de(reader)?,
            defence: u32::de(reader)?,
            swords: u32::de(reader)?,
            shields: u32::de(reader)?,
            energy: u32::de(reader)?,
            last_login: i64::de(reader)?,
            last_id: u16::de(reader)?,
            current_floor: u16::de(reader)?,
            tile: TileEntity::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        self.authority.byte_length()
            + self.name.byte_length()
            + 9 * 4
            + 8
            + 2
            + 2
            + self.tile.byte_length()
    }
}

impl Account for PlayerRecord {
    const KIND: AccountKind = AccountKind::PlayerData;
}
