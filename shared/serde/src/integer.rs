use crate::{ByteReader, ByteWriter, ConstByteLength, Serde, SerdeErr};

// Fixed-width little-endian integers. Each width is written as exactly
// `size_of::<T>()` bytes, with no sign or continuation bits.
macro_rules! impl_serde_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serde for $ty {
                fn ser(&self, writer: &mut ByteWriter) {
                    writer.write_bytes(&self.to_le_bytes());
                }

                fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                    let bytes = reader.read_array::<{ std::mem::size_of::<$ty>() }>()?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }

                fn byte_length(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }
            }

            impl ConstByteLength for $ty {
                fn const_byte_length() -> usize {
                    std::mem::size_of::<$ty>()
                }
            }
        )*
    };
}

impl_serde_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

// Tests
