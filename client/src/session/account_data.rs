use std::borrow::Cow;

use thiserror::Error;

use tufia_shared::{decode_board_snapshot, decode_player_record, BoardSnapshot, DecodeError, PlayerRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountDataError {
    #[error("Account data is not valid base64: {reason}")]
    InvalidBase64 { reason: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Account bytes as delivered by a subscription, either raw or base64 text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountData {
    Raw(Vec<u8>),
    Base64(String),
}

impl AccountData {
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>, AccountDataError> {
        match self {
            AccountData::Raw(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            AccountData::Base64(text) => base64::decode(text)
                .map(Cow::Owned)
                .map_err(|err| AccountDataError::InvalidBase64 {
                    reason: err.to_string(),
                }),
        }
    }

    pub fn decode_board(&self) -> Result<BoardSnapshot, AccountDataError> {
        let bytes = self.to_bytes()?;
        Ok(decode_board_snapshot(&bytes)?)
    }

    pub fn decode_player(&self) -> Result<PlayerRecord, AccountDataError> {
        let bytes = self.to_bytes()?;
        Ok(decode_player_record(&bytes)?)
    }
}

impl From<Vec<u8>> for AccountData {
    fn from(bytes: Vec<u8>) -> Self {
        AccountData::Raw(bytes)
    }
}
