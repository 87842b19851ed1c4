use std::fmt;

use tufia_serde::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

pub const IDENTITY_LENGTH: usize = 32;

/// A 32-byte public identity as published by the ledger.
///
/// Never interpreted; only compared for equality.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity([u8; IDENTITY_LENGTH]);

impl Identity {
    pub const fn new(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_LENGTH] {
        &self.0
    }

    /// The all-zero identity used by tiles nobody owns
    pub fn is_unset(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl From<[u8; IDENTITY_LENGTH]> for Identity {
    fn from(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({self})")
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // leading bytes are enough to tell owners apart in logs
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}

impl Serde for Identity {
    fn ser(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.0);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self(reader.read_array::<IDENTITY_LENGTH>()?))
    }

    fn byte_length(&self) -> usize {
        IDENTITY_LENGTH
    }
}

impl ConstByteLength for Identity {
    fn const_byte_length() -> usize {
        IDENTITY_LENGTH
    }
}
