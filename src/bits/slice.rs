use crate::{
    bits::{BitCursor, ReadBit},
    Error, Result,
};

/// An in-memory bit source over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    cursor: BitCursor,
}

impl<'a> Bits<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: BitCursor::new(bytes.len() * 8),
        }
    }

    /// Returns how many bits are yet to be read.
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.cursor.remaining_bits()
    }
}

impl ReadBit for Bits<'_> {
    fn read_bit(&mut self) -> Result<u8> {
        let address = self.cursor.advance().map_err(|_| Error::EndOfSource)?;
        Ok(address.bit_of(self.bytes[address.byte_offset()]))
    }
}
