use crate::{
    bits::{address_of, mask},
    lsb::{capacity, is_transparent, scan, Raster},
    Error, Result, Reveal,
};
use tracing::debug;

/// A raster package that contains a steganographic message of known length.
///
/// The [`reveal`][crate::Reveal::reveal] method collects three bits from every opaque pixel
/// until `len` bytes are recovered; bits past the end of the message are discarded.
///
/// # Examples
///
/// ```no_run
/// use steglsb::{lsb, Reveal};
///
/// let package = image::open("package.png")?.to_rgba8();
/// let message = lsb::Package::with_len(21, &package).reveal()?;
///
/// std::fs::write("message", message)?;
/// # Ok::<(), steglsb::Error>(())
/// ```
#[derive(Debug)]
pub struct Package<'a, R: ?Sized> {
    raster: &'a R,
    len: usize,
}

impl<'a, R: Raster + ?Sized> Package<'a, R> {
    /// Creates a new [`Package`] holding a message of `len` bytes in `raster`.
    #[must_use]
    pub fn with_len(len: usize, raster: &'a R) -> Self {
        Self { raster, len }
    }
}

impl<R: Raster + ?Sized> Reveal for Package<'_, R> {
    fn reveal(self) -> Result<Vec<u8>> {
        let available = capacity(self.raster);
        let bits = match self.len.checked_mul(8) {
            Some(bits) if bits <= available => bits,
            _ => return Err(Error::EndOfSource),
        };

        let mut message = vec![0u8; self.len];
        if bits == 0 {
            return Ok(message);
        }

        let mut offset = 0usize;

        for (x, y) in scan(self.raster.width(), self.raster.height()) {
            let pixel = self.raster.get_pixel(x, y);
            if is_transparent(&pixel) {
                continue;
            }

            let group = (pixel[0] & 1) << 2 | (pixel[1] & 1) << 1 | (pixel[2] & 1);

            let address = address_of(offset, self.len)?;
            let (byte, bit) = (address.byte_offset(), u32::from(address.bit_offset()));

            if bit <= 5 {
                message[byte] |= group << (5 - bit);
            } else {
                // the group straddles two bytes
                let trim = bit - 5;
                message[byte] |= group >> trim;

                if let Some(next) = message.get_mut(byte + 1) {
                    *next |= (group & mask(trim)) << (8 - trim);
                }
            }

            offset += 3;

            if offset >= bits {
                break;
            }
        }

        debug!(bytes = self.len, available, "revealed payload");

        Ok(message)
    }
}
