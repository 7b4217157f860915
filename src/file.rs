//! File-system front end for the [`lsb`][crate::lsb] codec.
//!
//! Only `.png` images are accepted on the packaged side, since lossy formats would destroy
//! the least significant bits the payload lives in. Cover images may be of any format the
//! `png` decoder understands and are converted to RGBA on load.

use crate::{
    bits::BufferedBitSource,
    lsb::{capacity, Carrier, Package},
    Conceal, Error, Result, Reveal,
};
use image::{ImageFormat, RgbaImage};
use std::{fs, fs::File, io, path::Path};
use tracing::{debug, info};

/// Lowercase extensions of lossless formats that preserve hidden bits.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png"];

/// Returns `true` if `path` has an extension listed in [`SUPPORTED_EXTENSIONS`].
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}

/// Checks that `path` names a supported image format.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] carrying the offending extension otherwise.
pub fn ensure_supported(path: &Path) -> Result<()> {
    if is_supported(path) {
        return Ok(());
    }

    Err(Error::UnsupportedFormat {
        extension: path
            .extension()
            .map(|extension| extension.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })
}

/// Loads the image at `path` as an RGBA raster, whatever its colour depth.
///
/// # Errors
///
/// Returns any I/O or decoding error encountered.
pub fn load(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Saves `raster` to `path` as a PNG image.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if `path` is not a `.png` path, or any I/O or
/// encoding error encountered.
pub fn save(raster: &RgbaImage, path: &Path) -> Result<()> {
    ensure_supported(path)?;
    raster.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Hides the contents of `message` in the image at `input` and writes the result to `output`,
/// returning the size of the hidden message in bytes.
///
/// The message is streamed through a [`BufferedBitSource`], and the output image is written
/// only once the whole message has been concealed.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] before touching any file if `output` is not a `.png`
/// path, [`Error::InsufficientCapacity`] if the message does not fit, or any I/O or image
/// error encountered. The message length is taken from file metadata, so `message` must be
/// a regular file; pipes and devices are rejected with [`io::ErrorKind::InvalidInput`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let size = steglsb::file::encode(
///     Path::new("cover.png"),
///     Path::new("message.txt"),
///     Path::new("package.png"),
/// )?;
/// # Ok::<(), steglsb::Error>(())
/// ```
pub fn encode(input: &Path, message: &Path, output: &Path) -> Result<usize> {
    ensure_supported(output)?;

    let mut raster = load(input)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        "loaded cover {}",
        input.display()
    );

    let message = File::open(message)?;
    let metadata = message.metadata()?;

    if !metadata.is_file() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "message must be a regular file",
        )));
    }

    let len = usize::try_from(metadata.len()).map_err(|_| Error::InsufficientCapacity {
        needed: usize::MAX,
        available: capacity(&raster),
    })?;

    Carrier::with_source(len, BufferedBitSource::new(message)?).conceal(&mut raster)?;
    save(&raster, output)?;

    info!("Size of the encoded message: {len} bytes");

    Ok(len)
}

/// Recovers a message of `size` bytes from the image at `input` and writes it to `output`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if `input` is not a `.png` path,
/// [`Error::EndOfSource`] if the image holds fewer than `size` bytes, or any I/O or image
/// error encountered.
pub fn decode(input: &Path, size: usize, output: &Path) -> Result<()> {
    ensure_supported(input)?;

    let raster = load(input)?;
    let message = Package::with_len(size, &raster).reveal()?;
    fs::write(output, &message)?;

    info!("Decoded {size} bytes into {}", output.display());

    Ok(())
}
