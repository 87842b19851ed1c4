use crate::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

// Fixed-size arrays carry no length prefix. Nested arrays (e.g. a board
// grid) are written outer index first.
impl<T: Serde, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut ByteWriter) {
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::de(reader)?);
        }
        match items.try_into() {
            Ok(array) => Ok(array),
            // The loop above pushes exactly N items
            Err(_) => unreachable!("array length mismatch"),
        }
    }

    fn byte_length(&self) -> usize {
        self.iter().map(Serde::byte_length).sum()
    }
}

impl<T: ConstByteLength, const N: usize> ConstByteLength for [T; N] {
    fn const_byte_length() -> usize {
        T::const_byte_length() * N
    }
}
