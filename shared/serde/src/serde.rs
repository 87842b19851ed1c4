use crate::{ByteReader, ByteWriter, SerdeErr};

/// A type that can be written to and read from a fixed-layout byte stream
pub trait Serde: Sized + Clone + PartialEq {
    /// Append this value to the writer
    fn ser(&self, writer: &mut ByteWriter);

    /// Read a value from the reader, advancing it past the consumed bytes
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` will write for this value
    fn byte_length(&self) -> usize;
}

/// Implemented by types whose encoded size never depends on their value
pub trait ConstByteLength {
    fn const_byte_length() -> usize;
}
