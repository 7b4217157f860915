//! Bit-level addressing over byte buffers.
//!
//! Every position in a buffer is a flat bit index which maps onto a [`BitAddress`], a pair
//! of byte offset and bit offset. Bit `0` of a byte is its most significant bit, so bits
//! are always visited MSB-first:
//!
//! ```
//! use steglsb::bits::{address_of, BitCursor};
//!
//! let address = address_of(9, 2)?;
//! assert_eq!((1, 1), address.into());
//!
//! let mut cursor = BitCursor::new(16);
//! assert_eq!((0, 0), cursor.advance()?.into());
//! assert_eq!(15, cursor.remaining_bits());
//! # Ok::<(), steglsb::Error>(())
//! ```
//!
//! Two bit sources share the [`ReadBit`] trait: [`Bits`] walks an in-memory slice, while
//! [`BufferedBitSource`] windows an arbitrary reader and slides the window as it goes, so
//! payloads larger than memory can still be consumed one bit at a time.

mod address;
mod buffered;
mod cursor;
mod slice;

pub use address::{address_of, mask, BitAddress};
pub use buffered::{BufferedBitSource, DEFAULT_BUFFER_SIZE};
pub use cursor::BitCursor;
pub use slice::Bits;

use crate::Result;

/// A trait for sources yielding one bit at a time, MSB-first within each byte.
pub trait ReadBit {
    /// Returns the next bit as `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfSource`][crate::Error::EndOfSource] once no bits remain.
    fn read_bit(&mut self) -> Result<u8>;
}

impl<S: ReadBit + ?Sized> ReadBit for &mut S {
    fn read_bit(&mut self) -> Result<u8> {
        (**self).read_bit()
    }
}
