use crate::{bits::BitAddress, Error, Result};
use std::cmp::Ordering;

/// A single-pass pointer over a bit-addressable space of fixed length.
///
/// The cursor yields successive [`BitAddress`] values and stops once it reaches its capacity.
/// It can only be rewound explicitly with [`BitCursor::reset`] or [`BitCursor::shift`].
///
/// Cursors are ordered and compared by their position alone. The capacity describes the space
/// a cursor walks and is not part of its identity; check it separately through
/// [`BitCursor::capacity_bits`] when two cursors must walk the same space.
///
/// # Examples
///
/// ```
/// use steglsb::bits::BitCursor;
///
/// let cursor = BitCursor::with_start(16, 7)?;
/// let addresses: Vec<(usize, u8)> = cursor.take(3).map(Into::into).collect();
///
/// assert_eq!(vec![(0, 7), (1, 0), (1, 1)], addresses);
/// # Ok::<(), steglsb::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitCursor {
    index: usize,
    capacity: usize,
}

impl BitCursor {
    /// Creates a new [`BitCursor`] at the start of a space of `capacity_bits` bits.
    #[must_use]
    pub fn new(capacity_bits: usize) -> Self {
        Self {
            index: 0,
            capacity: capacity_bits,
        }
    }

    /// Creates a new [`BitCursor`] positioned at bit `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is past `capacity_bits`.
    pub fn with_start(capacity_bits: usize, start: usize) -> Result<Self> {
        if start > capacity_bits {
            return Err(Error::InvalidRange {
                index: start as i128,
                capacity: capacity_bits,
            });
        }

        Ok(Self {
            index: start,
            capacity: capacity_bits,
        })
    }

    /// Returns the current address without advancing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if the cursor has reached its capacity.
    pub fn address(&self) -> Result<BitAddress> {
        if self.is_exhausted() {
            return Err(Error::Exhausted);
        }

        Ok(BitAddress::from_index(self.index))
    }

    /// Returns the current address and moves the cursor one bit forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if the cursor has already reached its capacity.
    pub fn advance(&mut self) -> Result<BitAddress> {
        let address = self.address()?;
        self.index += 1;
        Ok(address)
    }

    /// Moves the cursor by `delta` bits in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the new position falls outside of
    /// `[0, capacity_bits]`, in which case the cursor is left untouched.
    pub fn shift(&mut self, delta: isize) -> Result<()> {
        let target = self.index as i128 + delta as i128;

        if target < 0 || target > self.capacity as i128 {
            return Err(Error::InvalidRange {
                index: target,
                capacity: self.capacity,
            });
        }

        self.index = target as usize;
        Ok(())
    }

    /// Rewinds the cursor to the first bit.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Returns how many bits are left before the cursor is exhausted.
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.capacity - self.index
    }

    /// Returns the flat bit index of the cursor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index == self.capacity
    }

    /// Returns the signed distance in bits from `other` to this cursor.
    #[must_use]
    pub fn offset_from(&self, other: &Self) -> isize {
        self.index as isize - other.index as isize
    }
}

impl Iterator for BitCursor {
    type Item = BitAddress;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitCursor {}

impl PartialEq for BitCursor {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for BitCursor {}

impl PartialOrd for BitCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
