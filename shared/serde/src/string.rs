use crate::{ByteReader, ByteWriter, Serde, SerdeErr};

// Strings are the one length-prefixed value: `u32` byte count, then UTF-8.
impl Serde for String {
    fn ser(&self, writer: &mut ByteWriter) {
        let length = self.len() as u32;
        length.ser(writer);
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let start = reader.offset();
        let length = u32::de(reader)? as usize;
        let bytes = match reader.read_slice(length) {
            Ok(bytes) => bytes,
            Err(err) => {
                // keep the whole string read atomic
                reader.rewind(start);
                return Err(err);
            }
        };
        String::from_utf8(bytes.to_vec()).map_err(|_| SerdeErr::InvalidUtf8 {
            offset: start,
            length,
        })
    }

    fn byte_length(&self) -> usize {
        4 + self.len()
    }
}
