use log::debug;

use tufia_serde::{ByteReader, ByteWriter, Serde};

use super::error::DecodeError;

pub const DISCRIMINATOR_LENGTH: usize = 8;

/// The two account kinds published by the ledger program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    GameData,
    PlayerData,
}

impl AccountKind {
    pub const fn discriminator(self) -> u64 {
        match self {
            AccountKind::GameData => 13_758_009_850_765_924_589,
            AccountKind::PlayerData => 9_264_901_878_634_267_077,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AccountKind::GameData => "GameData",
            AccountKind::PlayerData => "PlayerData",
        }
    }
}

/// A record stored behind an 8-byte discriminator
pub trait Account: Serde {
    const KIND: AccountKind;

    /// Check the discriminator, then decode the body.
    ///
    /// Nothing is returned unless the discriminator matches, so a wrong
    /// account type can never produce a partially populated record.
    fn decode_account(buffer: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = ByteReader::new(buffer);
        let found = u64::de(&mut reader)?;
        let expected = Self::KIND.discriminator();
        if found != expected {
            return Err(DecodeError::DiscriminatorMismatch {
                account: Self::KIND.name(),
                expected,
                found,
            });
        }

        let account = Self::de(&mut reader)?;
        if reader.remaining() > 0 {
            debug!(
                "{} account has {} trailing bytes",
                Self::KIND.name(),
                reader.remaining()
            );
        }
        Ok(account)
    }

    fn encode_account(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(DISCRIMINATOR_LENGTH + self.byte_length());
        Self::KIND.discriminator().ser(&mut writer);
        self.ser(&mut writer);
        writer.to_bytes()
    }
}
