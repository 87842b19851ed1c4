use thiserror::Error;

/// Errors raised while reading a byte buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The buffer ended before a field could be read in full
    #[error("Unexpected end of buffer at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A length-prefixed string did not hold valid UTF-8
    #[error("Invalid UTF-8 in string of {length} bytes at offset {offset}")]
    InvalidUtf8 { offset: usize, length: usize },
}
