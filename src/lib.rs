//! # steglsb
//!
//! The **steglsb** library hides arbitrary byte payloads in the least significant bits of an
//! image's colour channels, and recovers them given the payload length.
//!
//! ## Modules
//!
//! - [`bits`] provides bit addressing over byte buffers and the bit sources that feed payloads
//!   into the codec, including a windowed source for payloads that do not fit in memory.
//! - [`lsb`] implements [`Conceal`] and [`Reveal`] over RGBA rasters. See its
//!   [documentation][`lsb`] for the exact layout.
//! - [`file`] wires both to the file system, accepting only lossless `.png` images.

pub mod bits;
pub mod file;
pub mod lsb;

mod error;

pub use error::{Error, Result};

use lsb::Raster;

/// A trait for objects able to conceal steganographic messages, or carriers.
///
/// Carriers are defined by a single required method, [`conceal`][Conceal::conceal],
/// which hides the payload in the given cover raster.
///
/// # Examples
///
/// [`lsb::Carrier`] can be used to conceal secret messages in images.
pub trait Conceal {
    /// Conceals the payload in the given cover and returns how many bits were written.
    ///
    /// # Errors
    ///
    /// This function returns any form of error encountered to the caller. If an error
    /// is returned, the cover may have been partially modified.
    fn conceal<R: Raster + ?Sized>(self, cover: &mut R) -> Result<usize>;
}

/// A trait for objects able to reveal steganographic messages, or packages.
///
/// Packages are defined by a single required method, [`reveal`][Reveal::reveal],
/// which returns the hidden message.
///
/// # Examples
///
/// [`lsb::Package`] can be used to reveal secret messages hidden in images.
pub trait Reveal {
    /// Returns the hidden message.
    ///
    /// It is up to the implementations to establish how the message length is known.
    ///
    /// # Errors
    ///
    /// This function returns any form of error encountered to the caller, including
    /// the package running out of data before the whole message was recovered.
    fn reveal(self) -> Result<Vec<u8>>;
}
