use crate::SerdeErr;

/// Cursor over a borrowed byte buffer.
///
/// Reads never go past the end of the buffer; a short read returns
/// [`SerdeErr::UnexpectedEof`] and leaves the cursor where it was.
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    offset: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Start reading at `offset` bytes into the buffer
    pub fn at(buffer: &'b [u8], offset: usize) -> Self {
        Self { buffer, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub(crate) fn rewind(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let slice = self.read_slice(N)?;
        let mut output = [0u8; N];
        output.copy_from_slice(slice);
        Ok(output)
    }

    pub fn read_slice(&mut self, length: usize) -> Result<&'b [u8], SerdeErr> {
        let remaining = self.remaining();
        if length > remaining || self.offset > self.buffer.len() {
            return Err(SerdeErr::UnexpectedEof {
                offset: self.offset,
                needed: length,
                remaining,
            });
        }
        let start = self.offset;
        self.offset += length;
        Ok(&self.buffer[start..self.offset])
    }
}
