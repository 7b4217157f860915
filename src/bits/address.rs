use crate::{Error, Result};

/// A position within a byte buffer, split into byte and bit offsets.
///
/// The bit offset is always below `8` and counts from the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitAddress {
    byte_offset: usize,
    bit_offset: u8,
}

impl BitAddress {
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            byte_offset: index >> 3,
            bit_offset: (index & 7) as u8,
        }
    }

    /// Returns the offset of the addressed byte.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the offset of the addressed bit within its byte, `0` being the MSB.
    #[must_use]
    pub fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Returns the flat bit index this address was derived from.
    #[must_use]
    pub fn index(&self) -> usize {
        (self.byte_offset << 3) | self.bit_offset as usize
    }

    /// Extracts the addressed bit from `byte`.
    #[must_use]
    pub fn bit_of(&self, byte: u8) -> u8 {
        (byte >> (7 - self.bit_offset)) & mask(1)
    }
}

impl From<BitAddress> for (usize, u8) {
    fn from(address: BitAddress) -> Self {
        (address.byte_offset, address.bit_offset)
    }
}

/// Computes the address of the bit at `index` in a buffer of `len` bytes.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the addressed byte lies past the end of the buffer.
pub fn address_of(index: usize, len: usize) -> Result<BitAddress> {
    let address = BitAddress::from_index(index);

    if address.byte_offset >= len {
        return Err(Error::OutOfRange {
            byte_offset: address.byte_offset,
            len,
        });
    }

    Ok(address)
}

/// Returns a byte with its `n` low-order bits set.
///
/// # Panics
///
/// Panics if `n` is greater than `8`.
#[must_use]
pub fn mask(n: u32) -> u8 {
    assert!(n <= 8, "mask width {n} exceeds a byte");
    ((1u16 << n) - 1) as u8
}
