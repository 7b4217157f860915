//! Raster implementations of [`Conceal`][crate::Conceal] and [`Reveal`][crate::Reveal] traits.
//!
//! The [`Carrier`] and [`Package`] structures hide a payload in, and recover it from, the
//! least significant bits of an image's colour channels.
//!
//! ## Layout
//!
//! Pixels are visited column by column: `x` is the outer loop and `y` the inner one, so the
//! whole first column is read before the second one starts. Fully transparent pixels (alpha
//! of `0`) are skipped and carry nothing. Every other pixel carries three payload bits, one in
//! the LSB of each of its red, green and blue channels, in that order. Payload bytes are
//! spread MSB-first. Alpha is never touched.
//!
//! The layout carries no length field: the receiver must know the payload length in bytes.
//! Pixels past the end of the payload are left exactly as they were.
//!
//! ## Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use steglsb::{lsb, Conceal, Reveal};
//!
//! let mut image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
//!
//! lsb::Carrier::new(b"hey").conceal(&mut image)?;
//!
//! let message = lsb::Package::with_len(3, &image).reveal()?;
//! assert_eq!(b"hey".as_slice(), message);
//! # Ok::<(), steglsb::Error>(())
//! ```

mod carrier;
mod package;
mod raster;

pub use carrier::Carrier;
pub use package::Package;
pub use raster::{capacity, Raster};

pub(crate) use raster::{is_transparent, scan};

/// Colour channels of a pixel that carry payload bits, in embedding order.
pub(crate) const CHANNELS: usize = 3;
