use crate::{
    bits::{BitAddress, BitCursor, ReadBit},
    Error, Result,
};
use std::io::{self, BufRead, BufReader, Read};
use tracing::trace;

/// Size of the window used by [`BufferedBitSource::new`], in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// A bit source that windows an underlying reader through a fixed-size buffer.
///
/// Bits are served from the buffered window until the cursor runs past its end, at which
/// point the window slides: unread bytes are moved to the front of the buffer, the cursor is
/// rebased onto them, and the vacated tail is topped up from the reader.
///
/// The reader is taken by value; pass `&mut reader` to keep using it afterwards.
///
/// # Examples
///
/// ```
/// use steglsb::bits::BufferedBitSource;
///
/// let source = [0b_1010_0000, 0xFF, 0x0F];
///
/// let mut bits = BufferedBitSource::with_capacity(2, source.as_slice())?;
/// assert_eq!(1, bits.read_bit()?);
/// assert_eq!(0, bits.read_bit()?);
///
/// // The third byte is pulled in once the first two are spent
/// assert_eq!(vec![0b_1000_0011, 0b_1111_1100, 0b_0011_1100], bits.read_bits(22)?);
/// # Ok::<(), steglsb::Error>(())
/// ```
#[derive(Debug)]
pub struct BufferedBitSource<R> {
    reader: BufReader<R>,
    buffer: Box<[u8]>,
    filled: usize,
    cursor: BitCursor,
}

impl<R: Read> BufferedBitSource<R> {
    /// Creates a new [`BufferedBitSource<R>`] with a window of [`DEFAULT_BUFFER_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while filling the first window.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, reader)
    }

    /// Creates a new [`BufferedBitSource<R>`] with a window of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while filling the first window.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize, reader: R) -> Result<Self> {
        Self::with_start(capacity, 0, reader)
    }

    /// Creates a new [`BufferedBitSource<R>`] whose first read starts at bit `start`
    /// of the first window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` lies past the bits available in the
    /// first window, or any I/O error raised while filling it.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_start(capacity: usize, start: usize, reader: R) -> Result<Self> {
        assert!(capacity > 0, "buffer capacity must be non-zero");

        let mut source = Self {
            reader: BufReader::new(reader),
            buffer: vec![0; capacity].into_boxed_slice(),
            filled: 0,
            cursor: BitCursor::new(0),
        };

        source.filled = source.fill_from(0)?;
        source.cursor = BitCursor::with_start(source.filled * 8, start)?;

        Ok(source)
    }

    /// Returns `true` if the reader has no bytes left beyond the current window.
    ///
    /// The probe peeks into the reader and consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while peeking.
    pub fn is_end_of_source(&mut self) -> Result<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }

    /// Slides the window so that it starts at the byte under the cursor and tops it up
    /// from the reader.
    ///
    /// The cursor keeps its bit offset within the byte it points at.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfSource`] if the reader has nothing left to give, leaving the
    /// window untouched.
    pub fn refill(&mut self) -> Result<()> {
        if self.is_end_of_source()? {
            return Err(Error::EndOfSource);
        }

        let index = self.cursor.index();
        let (byte, bit) = (index >> 3, index & 7);

        self.buffer.copy_within(byte..self.filled, 0);
        let retained = self.filled - byte;

        self.filled = self.fill_from(retained)?;
        self.cursor = BitCursor::with_start(self.filled * 8, bit)?;

        trace!(retained, filled = self.filled, "slid buffered window");

        Ok(())
    }

    /// Reads a single bit, sliding the window first if it has been spent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfSource`] if no bits are left in either the window or the reader.
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.cursor.is_exhausted() {
            self.refill()?;
        }

        let address = self.cursor.advance()?;
        Ok(address.bit_of(self.buffer[address.byte_offset()]))
    }

    /// Reads `n` bits packed MSB-first into `n.div_ceil(8)` bytes.
    ///
    /// The unused low-order bits of the last byte are zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the source runs dry before `n` bits were read.
    /// The bits read up to that point are consumed.
    pub fn read_bits(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; n.div_ceil(8)];

        for i in 0..n {
            let bit = match self.read_bit() {
                Err(Error::EndOfSource) => {
                    return Err(Error::InvalidArgument {
                        requested: n,
                        available: i,
                    })
                }
                result => result?,
            };

            bytes[i >> 3] |= bit << (7 - (i & 7));
        }

        Ok(bytes)
    }

    /// Returns the address of the next bit within the current window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if the window has been spent.
    pub fn position(&self) -> Result<BitAddress> {
        self.cursor.address()
    }

    /// Returns the bytes of the current window.
    #[must_use]
    pub fn window(&self) -> &[u8] {
        &self.buffer[..self.filled]
    }

    /// Returns the number of unread bits left in the current window.
    #[must_use]
    pub fn buffered_bits(&self) -> usize {
        self.cursor.remaining_bits()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn fill_from(&mut self, start: usize) -> io::Result<usize> {
        let mut filled = start;

        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(filled)
    }
}

impl<R: Read> ReadBit for BufferedBitSource<R> {
    fn read_bit(&mut self) -> Result<u8> {
        BufferedBitSource::read_bit(self)
    }
}
