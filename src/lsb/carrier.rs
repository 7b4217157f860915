use crate::{
    bits::{mask, Bits, ReadBit},
    lsb::{capacity, is_transparent, scan, Raster, CHANNELS},
    Conceal, Error, Result,
};
use tracing::debug;

/// A raster carrier that can conceal a steganographic message.
///
/// It pulls payload bits from its source in the [`conceal`][crate::Conceal::conceal] method
/// and writes them into the cover until `len` bytes were hidden. Pixels left over after that
/// are not touched.
///
/// # Examples
///
/// Concealing a message streamed from a file:
///
/// ```no_run
/// use steglsb::{bits::BufferedBitSource, lsb, Conceal};
/// use std::fs::File;
///
/// let message = File::open("message")?;
/// let len = message.metadata()?.len() as usize;
///
/// let mut cover = image::open("cover.png")?.to_rgba8();
///
/// lsb::Carrier::with_source(len, BufferedBitSource::new(message)?).conceal(&mut cover)?;
/// cover.save("package.png")?;
/// # Ok::<(), steglsb::Error>(())
/// ```
#[derive(Debug)]
pub struct Carrier<S> {
    source: S,
    len: usize,
}

impl<'a> Carrier<Bits<'a>> {
    /// Creates a new [`Carrier`] concealing the bytes of `payload`.
    #[must_use]
    pub fn new(payload: &'a [u8]) -> Self {
        Self::with_source(payload.len(), Bits::new(payload))
    }
}

impl<S: ReadBit> Carrier<S> {
    /// Creates a new [`Carrier<S>`] concealing `len` bytes pulled from `source`.
    #[must_use]
    pub fn with_source(len: usize, source: S) -> Self {
        Self { source, len }
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: ReadBit> Conceal for &mut Carrier<S> {
    fn conceal<R: Raster + ?Sized>(self, cover: &mut R) -> Result<usize> {
        let needed = self.len * 8;
        let available = capacity(cover);

        if needed > available {
            return Err(Error::InsufficientCapacity { needed, available });
        }

        let mut written = 0usize;

        for (x, y) in scan(cover.width(), cover.height()) {
            if written == needed {
                break;
            }

            let mut pixel = cover.get_pixel(x, y);
            if is_transparent(&pixel) {
                continue;
            }

            for channel in &mut pixel[..CHANNELS] {
                if written == needed {
                    break;
                }

                *channel = (*channel & !mask(1)) | self.source.read_bit()?;
                written += 1;
            }

            cover.put_pixel(x, y, pixel);
        }

        debug!(bits = written, available, "concealed payload");

        Ok(written)
    }
}
