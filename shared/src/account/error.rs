use thiserror::Error;

use tufia_serde::SerdeErr;

/// Errors that can occur while decoding a ledger account
///
/// None of these are fatal: the sync layer treats any of them as
/// "this account does not exist right now".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer is shorter than the fixed layout requires
    #[error("Account data truncated at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The leading 8 bytes do not identify the expected account kind
    #[error("Discriminator mismatch for {account} account: expected {expected}, found {found}")]
    DiscriminatorMismatch {
        account: &'static str,
        expected: u64,
        found: u64,
    },

    /// The player display name is not valid UTF-8
    #[error("Invalid UTF-8 in name of {length} bytes at offset {offset}")]
    InvalidUtf8 { offset: usize, length: usize },
}

impl From<SerdeErr> for DecodeError {
    fn from(err: SerdeErr) -> Self {
        match err {
            SerdeErr::UnexpectedEof {
                offset,
                needed,
                remaining,
            } => DecodeError::UnexpectedEof {
                offset,
                needed,
                remaining,
            },
            SerdeErr::InvalidUtf8 { offset, length } => DecodeError::InvalidUtf8 { offset, length },
        }
    }
}
